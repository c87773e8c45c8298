pub mod discovery;
pub mod git;
pub mod registry;
