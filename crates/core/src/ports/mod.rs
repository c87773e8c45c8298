pub mod projects;
pub mod registry;
pub mod report;
pub mod vcs;

// Re-exports
pub use projects::*;
pub use registry::*;
pub use report::*;
pub use vcs::*;
