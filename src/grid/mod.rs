//! The discretized strategy space.
mod candidates;
mod choice;
mod resolution;

pub use candidates::*;
pub use choice::*;
pub use resolution::*;
