//! Shared building blocks for the student directory workspace.

pub mod types;
pub mod utils;
