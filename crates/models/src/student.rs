use sea_orm::{entity::prelude::*, ActiveValue::{NotSet, Unchanged}, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub age: i32,
    pub is_check: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every mutable column of a student row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub age: i32,
    pub is_check: bool,
}

pub async fn insert(db: &DatabaseConnection, fields: Fields) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        first_name: Set(fields.first_name),
        last_name: Set(fields.last_name),
        email: Set(fields.email),
        address: Set(fields.address),
        city: Set(fields.city),
        age: Set(fields.age),
        is_check: Set(fields.is_check),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every mutable column of row `id`. `Ok(None)` when the row is gone.
pub async fn replace(db: &DatabaseConnection, id: i32, fields: Fields) -> Result<Option<Model>, ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        first_name: Set(fields.first_name),
        last_name: Set(fields.last_name),
        email: Set(fields.email),
        address: Set(fields.address),
        city: Set(fields.city),
        age: Set(fields.age),
        is_check: Set(fields.is_check),
    };
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remove row `id`; returns whether a row was deleted.
pub async fn remove(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// The whole table ordered by id.
pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
