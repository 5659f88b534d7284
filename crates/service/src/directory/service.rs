use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{ListCriteria, ListQuery, Student, StudentInput, StudentPage};
use super::repository::StudentRepository;
use super::sort::SortKey;
use crate::errors::ServiceError;
use crate::matching::TextMatch;
use crate::pagination::Pagination;

#[derive(Clone, Debug)]
pub struct DirectoryConfig {
    pub search_match: TextMatch,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl DirectoryConfig {
    pub fn from_settings(settings: &configs::DirectorySettings) -> Self {
        Self {
            search_match: settings.search_match,
            default_page_size: settings.default_page_size,
            max_page_size: settings.max_page_size,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::from_settings(&configs::DirectorySettings::default())
    }
}

/// Application service for the student directory.
///
/// Every write answers with [`StudentRepository::collection`]; each
/// check-then-write pair runs as separate statements.
pub struct DirectoryService<R: StudentRepository> {
    repo: Arc<R>,
    cfg: DirectoryConfig,
}

impl<R: StudentRepository> DirectoryService<R> {
    pub fn new(repo: Arc<R>, cfg: DirectoryConfig) -> Self { Self { repo, cfg } }

    /// Filter, sort and paginate. Invalid sort parameters fall back to id
    /// ascending; out-of-range paging values are clamped.
    #[instrument(skip(self), fields(search = ?query.search, sort = ?query.sort))]
    pub async fn list(&self, query: ListQuery) -> Result<StudentPage, ServiceError> {
        let default_size = i64::try_from(self.cfg.default_page_size).unwrap_or(i64::MAX);
        let pagination = Pagination {
            page: query.page.unwrap_or(1),
            page_size: query.page_size.unwrap_or(default_size),
        }
        .normalize(self.cfg.max_page_size);
        let criteria = ListCriteria {
            search: query.search.filter(|s| !s.is_empty()),
            search_match: self.cfg.search_match,
            sort: SortKey::resolve(query.sort.as_deref(), query.order.as_deref()),
            pagination,
        };
        let (total, data) = self.repo.page(&criteria).await?;
        debug!(total, returned = data.len(), sort = ?criteria.sort, "students_listed");
        Ok(StudentPage { total, page: pagination.page, page_size: pagination.page_size, data })
    }

    /// Point lookup; a missing id is `Ok(None)`, not an error.
    pub async fn get(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn add(&self, input: Option<StudentInput>) -> Result<Vec<Student>, ServiceError> {
        let input = input.ok_or_else(|| ServiceError::BadInput("Student payload is required".into()))?;
        let created = self.repo.insert(input).await?;
        info!(student_id = created.id, "student_added");
        self.repo.collection().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: Option<StudentInput>) -> Result<Vec<Student>, ServiceError> {
        let input = input.ok_or_else(|| ServiceError::BadInput("Student payload is required".into()))?;
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("Student"));
        }
        self.repo.replace(id, input).await?.ok_or_else(|| ServiceError::not_found("Student"))?;
        info!(student_id = id, "student_updated");
        self.repo.collection().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Vec<Student>, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("Student"));
        }
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found("Student"));
        }
        info!(student_id = id, "student_deleted");
        self.repo.collection().await
    }
}
