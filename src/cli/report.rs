use super::known::known;
use crate::*;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;

/// everything printed after a solve. serializes to json as-is; the text
/// form renders the strategy as an indented tree, one level per player.
#[derive(Debug, Serialize)]
pub struct Report {
    players: Players,
    resolution: Resolution,
    candidates: usize,
    plays: BTreeSet<Sequence>,
    shares: Vec<Share>,
    probabilities: Vec<Probability>,
    samples: Vec<Sequence>,
    known: Option<&'static [&'static str]>,
    #[serde(skip)]
    profile: Profile,
}

impl Report {
    pub fn new(
        players: Players,
        resolution: Resolution,
        candidates: &Candidates,
        profile: Profile,
        samples: Vec<Sequence>,
    ) -> Self {
        let shares = profile.shares();
        Self {
            players,
            resolution,
            candidates: candidates.len(),
            plays: profile.plays().clone(),
            probabilities: shares.iter().copied().map(Probability::from).collect(),
            shares,
            samples,
            known: known(players),
            profile,
        }
    }

    fn tree(&self, f: &mut std::fmt::Formatter<'_>, history: &History) -> std::fmt::Result {
        let Some(choices) = self.profile.responses(history) else {
            return Ok(());
        };
        let depth = history.len();
        let indent = "  ".repeat(depth);
        let label = Players::label(depth);
        match depth + 1 == self.profile.players() {
            true => writeln!(
                f,
                "{}{} {}",
                indent,
                label.cyan(),
                choices
                    .iter()
                    .map(Choice::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
                    .dimmed()
            ),
            false => choices.iter().try_for_each(|choice| {
                writeln!(f, "{}{} {}", indent, label.cyan(), choice.to_string().bold())?;
                self.tree(f, &history.push(*choice))
            }),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<32}{:<16}",
            "optimal plays".bold(),
            self.plays.len()
        )?;
        self.tree(f, &History::root())?;
        writeln!(f)?;
        writeln!(f, "{}", "expected shares".bold())?;
        for (player, (share, p)) in self.shares.iter().zip(self.probabilities.iter()).enumerate() {
            writeln!(
                f,
                "{:<8}{:<16.10}{:?}",
                Players::label(player),
                p,
                share
            )?;
        }
        if let Some(lines) = self.known {
            writeln!(f)?;
            writeln!(f, "{}", "known profile (closed form, not computed)".bold())?;
            for line in lines {
                writeln!(f, "{}", line.yellow())?;
            }
        }
        if !self.samples.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", "sampled plays".bold())?;
            for sample in self.samples.iter() {
                writeln!(f, "{}", History::from(sample.clone()))?;
            }
        }
        Ok(())
    }
}
