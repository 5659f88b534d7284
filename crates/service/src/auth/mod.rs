//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration and login business logic lives here; HTTP concerns stay in the server crate.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{AuthConfig, AuthService};
