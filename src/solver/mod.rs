//! Backward induction over history-keyed decision tables.
mod induction;
mod round;

pub use induction::*;
pub use round::*;
