use crate::*;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// solve the sequential closest-number game by backward induction
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// number of players; prompted for when absent
    #[arg(short, long)]
    pub players: Option<usize>,
    /// denominators d of the candidate fractions k/d
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = crate::DENOMINATORS.to_vec()
    )]
    pub denominators: Vec<u64>,
    /// reciprocal of the perturbation ε
    #[arg(short, long, default_value_t = crate::EPSILON_INVERSE)]
    pub epsilon: u64,
    /// worker threads; defaults to the number of logical cores
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// print the solution as json
    #[arg(long)]
    pub json: bool,
    /// randomly tie-broken plays to print
    #[arg(long, default_value_t = 0)]
    pub sample: usize,
    /// seed for the sampled plays
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// the player count from the flag, or from the terminal
    pub fn players(&self) -> anyhow::Result<Players> {
        match self.players {
            Some(n) => Players::try_from(n),
            None => Self::prompt(),
        }
    }
    pub fn resolution(&self) -> anyhow::Result<Resolution> {
        Resolution::new(self.denominators.clone(), self.epsilon)
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
    /// size the global rayon pool. must run before the first solve.
    #[cfg(feature = "parallel")]
    pub fn pool(&self) -> anyhow::Result<()> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::debug!("{:<32}{:<16}", "rayon threads", threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        Ok(())
    }
    #[cfg(not(feature = "parallel"))]
    pub fn pool(&self) -> anyhow::Result<()> {
        if self.threads.is_some() {
            log::warn!("built without the parallel feature, ignoring --threads");
        }
        Ok(())
    }

    fn prompt() -> anyhow::Result<Players> {
        let input = dialoguer::Input::<String>::new()
            .with_prompt("number of players")
            .validate_with(|s: &String| -> Result<(), String> {
                Players::try_from(s.as_str())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        Players::try_from(input.as_str())
    }
}
