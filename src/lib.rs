//! Backward induction for the sequential closest-number game.
//!
//! N players pick distinct numbers in [0,1] one after another. A target is
//! drawn uniformly from [0,1] and the closest number wins. Each player plays
//! optimally and picks uniformly among tied optimal choices.
//!
//! # Module Structure
//!
//! - `grid` — exact choice values, resolution, candidate set
//! - `payoff` — exact win probabilities
//! - `table` — history-keyed decision tables and the regrouping transform
//! - `solver` — backward induction rounds
//! - `profile` — strategy profile extracted from a solved table
//! - `players` — validated player count
//! - `cli` — argument parsing and rendering (feature `cli`)
#![allow(dead_code)]

mod grid;
mod payoff;
mod players;
mod profile;
mod solver;
mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use grid::*;
pub use payoff::*;
pub use players::*;
pub use profile::*;
pub use solver::*;
pub use table::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Approximate win probabilities, for display only. Exact values are [`Share`].
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DISCRETIZATION
// The continuous strategy space is replaced by fractions k/d, each flanked
// by k/d ± ε, plus the endpoints 0, ε, 1 − ε, 1.
// ============================================================================
/// Denominators of the default candidate grid.
pub const DENOMINATORS: [u64; 5] = [2, 3, 4, 5, 6];
/// Reciprocal of the default perturbation ε (ε = 1e-7).
pub const EPSILON_INVERSE: u64 = 10_000_000;
/// Fractional digits shown when printing a choice.
pub const DISPLAY_DIGITS: usize = 10;
/// Largest denominator accepted for the grid.
pub const MAX_DENOMINATOR: u64 = 1_000;
/// Largest 1/ε accepted, so every perturbed candidate stays a u64 fraction.
pub const MAX_EPSILON_INVERSE: u64 = 1_000_000_000_000;

// ============================================================================
// PLAYER COUNT
// The initial table holds every length-N permutation of the candidate set,
// so N is capped well before memory runs out.
// ============================================================================
/// Fewest players that make a game.
pub const MIN_PLAYERS: usize = 2;
/// Most players accepted at the boundary.
pub const MAX_PLAYERS: usize = 5;
/// Permutation count above which solving logs a warning (~16M plays).
pub const PERMUTATION_WARN: u128 = 1 << 24;

// ============================================================================
// ARITHMETIC
// ============================================================================
/// Greatest common divisor, used to keep fractions reduced.
pub(crate) fn gcd(a: u128, b: u128) -> u128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to stderr
/// so that stdout stays clean for the solved output.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
