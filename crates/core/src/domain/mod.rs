pub mod branch;
pub mod commit;
pub mod divergence;
pub mod project;

// Re-exports for convenience
pub use branch::*;
pub use commit::*;
pub use divergence::*;
pub use project::*;
