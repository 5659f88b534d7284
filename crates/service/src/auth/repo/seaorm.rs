use sea_orm::{sea_query::Expr, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::auth::domain::{Account, Credentials, NewAccount};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::matching::{self, TextMatch};
use models::account;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_account(m: &account::Model) -> Account {
    Account { id: m.id, username: m.username.clone(), email: m.email.clone(), created_at: m.created_at }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_email(&self, email: &str, mode: TextMatch) -> Result<Option<Credentials>, AuthError> {
        let column = Expr::col((account::Entity, account::Column::Email)).into();
        let backend = self.db.get_database_backend();
        let res = account::Entity::find()
            .filter(matching::equals(backend, mode, column, email))
            .order_by_asc(account::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|m| Credentials { account: to_account(&m), password_hash: m.password_hash }))
    }

    async fn create_account(&self, new: NewAccount) -> Result<Account, AuthError> {
        let created = account::create(&self.db, &new.username, &new.email, new.password_hash, new.created_at).await?;
        Ok(to_account(&created))
    }
}
