pub mod errors;
pub mod db;
pub mod account;
pub mod student;

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::EntityTrait;

    use crate::{account, db, student};

    fn sample(first: &str, age: i32) -> student::Fields {
        student::Fields {
            first_name: first.into(),
            last_name: "Doe".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            age,
            is_check: false,
        }
    }

    #[tokio::test]
    async fn student_insert_replace_remove() -> anyhow::Result<()> {
        let db = db::connect_and_migrate(&db::in_memory_config()).await?;

        let a = student::insert(&db, sample("Ann", 20)).await?;
        let b = student::insert(&db, sample("Bob", 30)).await?;
        assert!(b.id > a.id);

        let mut changed = sample("Annie", 21);
        changed.is_check = true;
        let updated = student::replace(&db, a.id, changed.clone()).await?.expect("row exists");
        assert_eq!(updated.first_name, "Annie");
        assert_eq!(updated.age, 21);
        assert!(updated.is_check);

        assert!(student::replace(&db, 9999, changed).await?.is_none());

        assert!(student::remove(&db, b.id).await?);
        assert!(!student::remove(&db, b.id).await?);

        let rows = student::all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, a.id);
        Ok(())
    }

    #[tokio::test]
    async fn account_create_rejects_empty_hash() -> anyhow::Result<()> {
        let db = db::connect_and_migrate(&db::in_memory_config()).await?;
        let err = account::create(&db, "ann", "ann@example.com", "  ".into(), Utc::now()).await;
        assert!(matches!(err, Err(crate::errors::ModelError::Validation(_))));

        let created = account::create(&db, "ann", "ann@example.com", "$argon2id$stub".into(), Utc::now()).await?;
        let found = account::Entity::find_by_id(created.id).one(&db).await?;
        assert_eq!(found.map(|a| a.email), Some("ann@example.com".to_string()));
        Ok(())
    }
}
