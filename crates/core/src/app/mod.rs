pub mod divergence;
pub mod info;
pub mod overview;

pub use divergence::*;
pub use info::*;
pub use overview::*;
