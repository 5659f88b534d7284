use async_trait::async_trait;

use super::domain::{Account, Credentials, NewAccount};
use super::errors::AuthError;
use crate::matching::TextMatch;

/// Repository abstraction for account persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// First account (lowest id) whose email matches under `mode`.
    async fn find_by_email(&self, email: &str, mode: TextMatch) -> Result<Option<Credentials>, AuthError>;
    /// Unconditional insert; uniqueness is the caller's check.
    async fn create_account(&self, account: NewAccount) -> Result<Account, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::matching::text_eq;

    #[derive(Default)]
    pub struct MockAuthRepository {
        rows: Mutex<Vec<Credentials>>,
    }

    impl MockAuthRepository {
        pub fn len(&self) -> usize {
            self.rows.lock().map(|r| r.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Stored hash for `email`, for asserting that raw passwords are never kept.
        pub fn stored_hash(&self, email: &str) -> Option<String> {
            let rows = self.rows.lock().ok()?;
            rows.iter().find(|c| c.account.email == email).map(|c| c.password_hash.clone())
        }
    }

    fn poisoned() -> AuthError {
        AuthError::Repository("mock repository lock poisoned".into())
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_email(&self, email: &str, mode: TextMatch) -> Result<Option<Credentials>, AuthError> {
            let rows = self.rows.lock().map_err(|_| poisoned())?;
            Ok(rows.iter().find(|c| text_eq(mode, &c.account.email, email)).cloned())
        }

        async fn create_account(&self, account: NewAccount) -> Result<Account, AuthError> {
            let mut rows = self.rows.lock().map_err(|_| poisoned())?;
            let created = Account {
                id: rows.len() as i32 + 1,
                username: account.username,
                email: account.email,
                created_at: account.created_at,
            };
            rows.push(Credentials { account: created.clone(), password_hash: account.password_hash });
            Ok(created)
        }
    }
}
