//! Solver Binary
//!
//! Prints the optimal plays of the closest-number game for N players.
//!
//! Options: --players, --denominators, --epsilon, --threads, --json, --sample, --seed

use nearest::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::CLI::run()
}
