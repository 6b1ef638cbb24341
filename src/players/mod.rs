//! Player count validation.
mod players;

pub use players::*;
