//! repoinfo core - branch divergence and unpublished-work aggregation
//!
//! This crate holds the domain types, the ports (interfaces) onto version
//! control, branch registries, project resolution and report rendering, and
//! the logic that drives them. Git, filesystem and terminal access live in
//! adapters outside this crate.

pub mod app;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
