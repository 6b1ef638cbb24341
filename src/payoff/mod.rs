//! Exact win probabilities under a uniform target draw.
mod evaluator;
mod share;

pub use evaluator::*;
pub use share::*;
