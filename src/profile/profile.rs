use crate::*;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// the strategy profile read off a solved table.
///
/// every prefix of an optimal play is a history some player actually
/// faces in equilibrium; the profile maps each one to the set of optimal
/// next choices. a player facing several picks among them at random,
/// weighted by how many optimal plays follow each one; that is the only
/// place randomness enters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    players: usize,
    plays: BTreeSet<Sequence>,
    strategy: BTreeMap<History, BTreeSet<Choice>>,
}

impl TryFrom<&Table> for Profile {
    type Error = anyhow::Error;
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let plays = table
            .plays()
            .ok_or_else(|| anyhow::anyhow!("table is not solved down to the root"))?
            .clone();
        let players = plays
            .iter()
            .next()
            .map(Vec::len)
            .ok_or_else(|| anyhow::anyhow!("solved table holds no plays"))?;
        let mut strategy = BTreeMap::<History, BTreeSet<Choice>>::new();
        for play in plays.iter() {
            for (k, choice) in play.iter().enumerate() {
                strategy
                    .entry(History::from(play[..k].to_vec()))
                    .or_default()
                    .insert(*choice);
            }
        }
        Ok(Self {
            players,
            plays,
            strategy,
        })
    }
}

impl Profile {
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn plays(&self) -> &BTreeSet<Sequence> {
        &self.plays
    }
    pub fn strategy(&self) -> &BTreeMap<History, BTreeSet<Choice>> {
        &self.strategy
    }
    /// the first player's optimal choices
    pub fn openings(&self) -> &BTreeSet<Choice> {
        self.responses(&History::root())
            .expect("solved profile has a root")
    }
    /// the next mover's optimal choices, if `history` is reached in equilibrium
    pub fn responses(&self, history: &History) -> Option<&BTreeSet<Choice>> {
        self.strategy.get(history)
    }
    /// expected win probability of a player, averaged uniformly over the
    /// optimal plays (the same weighting the solver uses)
    pub fn share(&self, player: usize) -> Share {
        Share::mean(self.plays.iter().map(|play| {
            let mut others = play.clone();
            let choice = others.remove(player);
            prob_win(choice, &others)
        }))
        .expect("solved profile has plays")
    }
    pub fn shares(&self) -> Vec<Share> {
        (0..self.players).map(|p| self.share(p)).collect()
    }
    /// one optimal play drawn uniformly. each mover's pick is thereby
    /// weighted by the optimal plays below it, which is the weighting
    /// [`Profile::share`] and the solver average with.
    pub fn sample<R>(&self, rng: &mut R) -> Sequence
    where
        R: Rng + ?Sized,
    {
        self.plays
            .iter()
            .choose(rng)
            .cloned()
            .expect("solved profile has plays")
    }
}
