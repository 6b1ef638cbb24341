use super::round::Round;
use crate::*;
use std::collections::BTreeSet;
use std::time::Instant;

/// one mover's verdict at one history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// expected share of every optimal choice
    pub value: Share,
    /// all choices achieving it, ascending
    pub optimal: Vec<Choice>,
    /// each optimal choice followed by each of its surviving tails
    pub continuations: BTreeSet<Sequence>,
}

/// backward induction over the permutation table.
///
/// the last mover is solved first, against every history of predecessors;
/// the table is then collapsed by one level and the next-to-last mover is
/// solved against the last mover's optimal replies, and so on down to the
/// first player. tied choices all survive and later movers average over
/// them uniformly.
pub struct Induction {
    candidates: Candidates,
    players: Players,
}

impl Induction {
    /// rejects grids whose exact shares would not fit in u128
    pub fn new(candidates: Candidates, players: Players) -> anyhow::Result<Self> {
        candidates.admits(players.count())?;
        Ok(Self {
            candidates,
            players,
        })
    }
    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }
    pub fn players(&self) -> Players {
        self.players
    }

    /// enumerate every play and unwind it to the optimal ones
    pub fn solve(&self) -> Table {
        let n = self.players.count();
        let count = self.candidates.permutations(n);
        log::info!(
            "{:<32}{:<16}{:<24}",
            "enumerating plays",
            self.players,
            format!("{} candidates", self.candidates.len()),
        );
        if count > PERMUTATION_WARN {
            log::warn!("{} plays to enumerate, expect heavy memory use", count);
        }
        Self::unwind(Table::permutations(&self.candidates, n))
    }

    /// resolve the movers one at a time, last first, threading the table
    /// through each round. a table keyed by complete plays comes out keyed
    /// by the empty history alone.
    pub fn unwind(table: Table) -> Table {
        let depth = table.depth().unwrap_or_default();
        (0..depth).rev().fold(table, |table, mover| {
            let start = Instant::now();
            let peeled = table.peel();
            let histories = peeled.len();
            let branches = peeled.branches();
            let table = Self::round(peeled);
            let round = Round {
                mover,
                histories,
                branches,
                sequences: table.sequences(),
                elapsed: start.elapsed(),
            };
            log::info!("{}", round);
            table
        })
    }

    /// solve the mover at every history of a regrouped table
    pub fn round(peeled: Peeled) -> Table {
        Self::decisions(peeled)
            .into_iter()
            .map(|(prev, decision)| (prev, decision.continuations))
            .collect()
    }

    /// histories are independent of one another, so they fan out across
    /// the rayon pool. output order follows input order either way.
    #[cfg(feature = "parallel")]
    fn decisions(peeled: Peeled) -> Vec<(History, Decision)> {
        use rayon::prelude::*;
        peeled
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(prev, branches)| {
                let decision = Self::decide(&prev, branches);
                (prev, decision)
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    fn decisions(peeled: Peeled) -> Vec<(History, Decision)> {
        peeled
            .into_iter()
            .map(|(prev, branches)| {
                let decision = Self::decide(&prev, branches);
                (prev, decision)
            })
            .collect()
    }

    /// the mover's optimal choices after `prev`, compared by exact value
    pub fn decide(prev: &History, branches: Branches) -> Decision {
        let values = branches
            .iter()
            .map(|(choice, tails)| (*choice, Self::value(prev, *choice, tails)))
            .collect::<Vec<_>>();
        let value = values
            .iter()
            .map(|(_, v)| *v)
            .max()
            .expect("mover has at least one choice");
        let optimal = values
            .iter()
            .filter(|(_, v)| *v == value)
            .map(|(choice, _)| *choice)
            .collect::<Vec<_>>();
        log::trace!("{:<24} {:?} -> {:?}", prev.to_string(), value, optimal);
        let continuations = branches
            .into_iter()
            .filter(|(choice, _)| optimal.contains(choice))
            .flat_map(|(choice, tails)| Self::prepend(choice, tails))
            .collect();
        Decision {
            value,
            optimal,
            continuations,
        }
    }

    /// expected share of playing `choice` after `prev`. the last mover
    /// has no tails; everyone else averages over the surviving tails.
    pub fn value(prev: &History, choice: Choice, tails: &BTreeSet<Sequence>) -> Share {
        match tails.is_empty() {
            true => prob_win(choice, prev.choices()),
            false => Share::mean(tails.iter().map(|tail| prob_win(choice, &prev.join(tail))))
                .expect("tails are non-empty"),
        }
    }

    fn prepend(choice: Choice, tails: BTreeSet<Sequence>) -> Vec<Sequence> {
        match tails.is_empty() {
            true => vec![vec![choice]],
            false => tails
                .into_iter()
                .map(|tail| std::iter::once(choice).chain(tail).collect())
                .collect(),
        }
    }
}
