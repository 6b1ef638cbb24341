//! Equilibrium strategy profile read off a solved table.
mod profile;

pub use profile::*;
