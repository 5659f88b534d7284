use async_trait::async_trait;

use super::domain::{ListCriteria, Student, StudentInput};
use crate::errors::ServiceError;

/// Repository abstraction for the student table.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Total matching rows (before pagination) and the requested page.
    async fn page(&self, criteria: &ListCriteria) -> Result<(u64, Vec<Student>), ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Student>, ServiceError>;
    async fn insert(&self, input: StudentInput) -> Result<Student, ServiceError>;
    /// Overwrite every mutable field; `Ok(None)` when the row does not exist.
    async fn replace(&self, id: i32, input: StudentInput) -> Result<Option<Student>, ServiceError>;
    /// Returns whether a row was removed.
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
    /// What every write hands back to the caller: currently the whole table, ordered by id.
    async fn collection(&self) -> Result<Vec<Student>, ServiceError>;
}

/// In-memory repository for tests and benchmarks
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::matching::text_contains;

    #[derive(Default)]
    struct Table {
        next_id: i32,
        rows: Vec<Student>,
    }

    #[derive(Default)]
    pub struct MockStudentRepository {
        table: Mutex<Table>,
    }

    fn poisoned() -> ServiceError {
        ServiceError::Db("mock repository lock poisoned".into())
    }

    fn build(id: i32, input: StudentInput) -> Student {
        Student {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            address: input.address,
            city: input.city,
            age: input.age,
            is_check: input.is_check,
        }
    }

    impl MockStudentRepository {
        pub fn len(&self) -> usize {
            self.table.lock().map(|t| t.rows.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn page(&self, criteria: &ListCriteria) -> Result<(u64, Vec<Student>), ServiceError> {
            let table = self.table.lock().map_err(|_| poisoned())?;
            let mut matched: Vec<Student> = table
                .rows
                .iter()
                .filter(|s| match &criteria.search {
                    Some(needle) => text_contains(criteria.search_match, &s.first_name, needle),
                    None => true,
                })
                .cloned()
                .collect();
            matched.sort_by(|a, b| criteria.sort.compare(a, b));
            let total = matched.len() as u64;
            let offset = usize::try_from(criteria.pagination.offset()).unwrap_or(usize::MAX);
            let limit = usize::try_from(criteria.pagination.limit()).unwrap_or(usize::MAX);
            let data = matched.into_iter().skip(offset).take(limit).collect();
            Ok((total, data))
        }

        async fn get(&self, id: i32) -> Result<Option<Student>, ServiceError> {
            let table = self.table.lock().map_err(|_| poisoned())?;
            Ok(table.rows.iter().find(|s| s.id == id).cloned())
        }

        async fn insert(&self, input: StudentInput) -> Result<Student, ServiceError> {
            let mut table = self.table.lock().map_err(|_| poisoned())?;
            table.next_id += 1;
            let student = build(table.next_id, input);
            table.rows.push(student.clone());
            Ok(student)
        }

        async fn replace(&self, id: i32, input: StudentInput) -> Result<Option<Student>, ServiceError> {
            let mut table = self.table.lock().map_err(|_| poisoned())?;
            Ok(table.rows.iter_mut().find(|s| s.id == id).map(|slot| {
                *slot = build(id, input);
                slot.clone()
            }))
        }

        async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
            let mut table = self.table.lock().map_err(|_| poisoned())?;
            let before = table.rows.len();
            table.rows.retain(|s| s.id != id);
            Ok(table.rows.len() != before)
        }

        async fn collection(&self) -> Result<Vec<Student>, ServiceError> {
            let table = self.table.lock().map_err(|_| poisoned())?;
            let mut rows = table.rows.clone();
            rows.sort_by_key(|s| s.id);
            Ok(rows)
        }
    }
}
