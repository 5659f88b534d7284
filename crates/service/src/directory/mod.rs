//! Student directory: paged listing with search and sort, plus CRUD.
//!
//! Same layering as `auth`: domain types, a repository trait with SeaORM and
//! in-memory implementations, and a framework-free service.

pub mod domain;
pub mod sort;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{DirectoryConfig, DirectoryService};
