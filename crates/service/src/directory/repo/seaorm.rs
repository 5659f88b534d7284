use sea_orm::{sea_query::Expr, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::directory::domain::{ListCriteria, Student, StudentInput};
use crate::directory::repository::StudentRepository;
use crate::errors::ServiceError;
use crate::matching;
use models::student;

pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn page(&self, criteria: &ListCriteria) -> Result<(u64, Vec<Student>), ServiceError> {
        let mut select = student::Entity::find();
        if let Some(needle) = criteria.search.as_deref() {
            let column = Expr::col((student::Entity, student::Column::FirstName)).into();
            let backend = self.db.get_database_backend();
            select = select.filter(matching::contains(backend, criteria.search_match, column, needle));
        }
        let total = select.clone().count(&self.db).await?;
        let data = criteria
            .sort
            .apply(select)
            .offset(criteria.pagination.offset())
            .limit(criteria.pagination.limit())
            .all(&self.db)
            .await?;
        Ok((total, data))
    }

    async fn get(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        Ok(student::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, input: StudentInput) -> Result<Student, ServiceError> {
        Ok(student::insert(&self.db, input.into()).await?)
    }

    async fn replace(&self, id: i32, input: StudentInput) -> Result<Option<Student>, ServiceError> {
        Ok(student::replace(&self.db, id, input.into()).await?)
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(student::remove(&self.db, id).await?)
    }

    async fn collection(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(student::all(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::sort::SortKey;
    use crate::matching::{text_contains, TextMatch};
    use crate::pagination::Pagination;
    use crate::test_support::get_db;

    async fn seeded() -> anyhow::Result<SeaOrmStudentRepository> {
        let repo = SeaOrmStudentRepository { db: get_db().await? };
        for (first, age) in [("Ann", 30), ("Joanna", 19), ("annie", 25), ("Bob", 41)] {
            repo.insert(StudentInput {
                first_name: first.into(),
                last_name: "Doe".into(),
                email: format!("{}@school.test", first.to_lowercase()),
                address: "1 Main St".into(),
                city: "Salem".into(),
                age,
                is_check: false,
            })
            .await?;
        }
        Ok(repo)
    }

    fn criteria(search: Option<&str>, mode: TextMatch, sort: SortKey, page: i64, page_size: i64) -> ListCriteria {
        ListCriteria {
            search: search.map(str::to_string),
            search_match: mode,
            sort,
            pagination: Pagination { page, page_size },
        }
    }

    fn names(rows: &[Student]) -> Vec<&str> {
        rows.iter().map(|s| s.first_name.as_str()).collect()
    }

    #[tokio::test]
    async fn exact_search_is_case_sensitive() -> anyhow::Result<()> {
        let repo = seeded().await?;
        let (total, rows) = repo.page(&criteria(Some("Ann"), TextMatch::Exact, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 1);
        assert_eq!(names(&rows), vec!["Ann"]);

        let (total, rows) = repo.page(&criteria(Some("ann"), TextMatch::Exact, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 2);
        assert_eq!(names(&rows), vec!["Joanna", "annie"]);
        Ok(())
    }

    #[tokio::test]
    async fn ignore_case_search_folds() -> anyhow::Result<()> {
        let repo = seeded().await?;
        let (total, rows) = repo.page(&criteria(Some("ANN"), TextMatch::IgnoreCase, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 3);
        assert_eq!(names(&rows), vec!["Ann", "Joanna", "annie"]);
        Ok(())
    }

    #[tokio::test]
    async fn non_ascii_names_fold_like_the_mock() -> anyhow::Result<()> {
        let repo = seeded().await?;
        repo.insert(StudentInput { first_name: "Émile".into(), ..Default::default() }).await?;

        let (total, rows) = repo.page(&criteria(Some("ÉMILE"), TextMatch::IgnoreCase, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 1);
        assert_eq!(names(&rows), vec!["Émile"]);
        assert!(text_contains(TextMatch::IgnoreCase, "Émile", "ÉMILE"));

        let (total, _) = repo.page(&criteria(Some("émile"), TextMatch::IgnoreCase, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 0);
        assert!(!text_contains(TextMatch::IgnoreCase, "Émile", "émile"));

        let (total, _) = repo.page(&criteria(Some("Émile"), TextMatch::Exact, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 1);
        let (total, _) = repo.page(&criteria(Some("ÉMILE"), TextMatch::Exact, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn wildcard_characters_match_literally() -> anyhow::Result<()> {
        let repo = seeded().await?;
        let (total, _) = repo.page(&criteria(Some("%"), TextMatch::Exact, SortKey::default(), 1, 10)).await?;
        assert_eq!(total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn sorts_by_age_descending() -> anyhow::Result<()> {
        let repo = seeded().await?;
        let key = SortKey::resolve(Some("age"), Some("desc"));
        let (_, rows) = repo.page(&criteria(None, TextMatch::Exact, key, 1, 10)).await?;
        let ages: Vec<i32> = rows.iter().map(|s| s.age).collect();
        assert_eq!(ages, vec![41, 30, 25, 19]);
        Ok(())
    }

    #[tokio::test]
    async fn total_counts_before_paging() -> anyhow::Result<()> {
        let repo = seeded().await?;
        let (total, rows) = repo.page(&criteria(None, TextMatch::Exact, SortKey::default(), 2, 3)).await?;
        assert_eq!(total, 4);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_name, "Bob");

        let (total, rows) = repo.page(&criteria(None, TextMatch::Exact, SortKey::default(), 5, 3)).await?;
        assert_eq!(total, 4);
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_rows() -> anyhow::Result<()> {
        let repo = seeded().await?;
        assert!(repo.replace(99, StudentInput::default()).await?.is_none());
        assert!(!repo.remove(99).await?);

        let updated = repo.replace(2, StudentInput { first_name: "Jo".into(), ..Default::default() }).await?;
        let updated = updated.expect("row 2 exists");
        assert_eq!(updated.first_name, "Jo");
        assert_eq!(updated.age, 0);

        assert!(repo.remove(2).await?);
        let ids: Vec<i32> = repo.collection().await?.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        Ok(())
    }
}
