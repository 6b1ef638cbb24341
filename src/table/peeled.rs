use super::history::History;
use super::history::Sequence;
use super::table::Table;
use crate::Choice;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// continuations reachable after each choice of the next mover
pub type Branches = BTreeMap<Choice, BTreeSet<Sequence>>;

/// the transient, regrouped view of a [`Table`] used inside one
/// induction round: history → next choice → continuations after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peeled(BTreeMap<History, Branches>);

impl From<BTreeMap<History, Branches>> for Peeled {
    fn from(map: BTreeMap<History, Branches>) -> Self {
        Self(map)
    }
}

impl Peeled {
    /// inverse of [`Table::peel`]: fold each inner choice back onto its key
    pub fn unpeel(self) -> Table {
        self.0
            .into_iter()
            .flat_map(|(prev, branches)| {
                branches
                    .into_iter()
                    .map(move |(choice, continuations)| (prev.push(choice), continuations))
            })
            .collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&History, &Branches)> {
        self.0.iter()
    }
    /// number of (history, choice) pairs under consideration
    pub fn branches(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
}

impl IntoIterator for Peeled {
    type Item = (History, Branches);
    type IntoIter = std::collections::btree_map::IntoIter<History, Branches>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
