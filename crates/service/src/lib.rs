//! Service layer providing the account and student directory business rules.
//! - Separates business logic from data access via repository traits.
//! - Reuses entity definitions in the `models` crate.
//! - Ships SeaORM-backed repositories and in-memory mocks for tests.

pub mod errors;
pub mod pagination;
pub mod matching;
pub mod auth;
pub mod directory;
#[cfg(test)]
pub mod test_support;
