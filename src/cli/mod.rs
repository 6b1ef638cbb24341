//! Command-line front end: argument parsing, the player prompt, and
//! rendering of the solved game.
mod args;
mod known;
mod report;

pub use args::*;
pub use known::*;
pub use report::*;

use crate::*;
use clap::Parser;

pub struct CLI;

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        args.pool()?;
        let players = args.players()?;
        let resolution = args.resolution()?;
        let candidates = Candidates::from(&resolution);
        log::info!(
            "{:<32}{:<16}{:<24}",
            "solving",
            players,
            format!("{} plays", candidates.permutations(players.count())),
        );
        let table = Induction::new(candidates.clone(), players)?.solve();
        let profile = Profile::try_from(&table)?;
        log::info!("{:<32}{:<16}", "solved", format!("{} plays", profile.plays().len()));
        let ref mut rng = args.rng();
        let samples = (0..args.sample).map(|_| profile.sample(rng)).collect();
        let report = Report::new(players, resolution, &candidates, profile, samples);
        match args.json {
            true => println!("{}", serde_json::to_string_pretty(&report)?),
            false => print!("{}", report),
        }
        Ok(())
    }
}
