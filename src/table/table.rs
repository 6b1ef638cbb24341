use super::history::History;
use super::history::Sequence;
use super::peeled::Peeled;
use crate::Candidates;
use crate::Choice;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// the decision table: for each history, the continuations that are
/// still in play after it.
///
/// it starts out keyed by every complete play (each with no continuation),
/// and each induction round shortens the keys by one. once solved it holds
/// a single entry, the empty history, mapped to the optimal plays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table(BTreeMap<History, BTreeSet<Sequence>>);

impl Table {
    /// every ordered play of `n` distinct candidates, none continued yet
    pub fn permutations(candidates: &Candidates, n: usize) -> Self {
        let pool = candidates.iter().copied().collect::<Vec<Choice>>();
        let mut table = Self::default();
        table.arrange(&pool, &mut Vec::with_capacity(n), n);
        table
    }
    /// depth-first over distinct choices, each complete play keyed directly
    fn arrange(&mut self, pool: &[Choice], prefix: &mut Vec<Choice>, n: usize) {
        if prefix.len() == n {
            self.0.insert(History::from(prefix.clone()), BTreeSet::new());
            return;
        }
        for choice in pool {
            if !prefix.contains(choice) {
                prefix.push(*choice);
                self.arrange(pool, prefix, n);
                prefix.pop();
            }
        }
    }

    /// regroup by the last choice of each key: a table keyed by histories
    /// of length L becomes one keyed by length L − 1, with the dropped
    /// choice as an inner key. keys must be non-empty.
    pub fn peel(self) -> Peeled {
        let mut peeled = BTreeMap::<History, BTreeMap<Choice, BTreeSet<Sequence>>>::new();
        for (history, continuations) in self.0 {
            let (prev, last) = history.pop();
            peeled.entry(prev).or_default().insert(last, continuations);
        }
        Peeled::from(peeled)
    }

    /// length of the histories keying this table
    pub fn depth(&self) -> Option<usize> {
        self.0.keys().next().map(History::len)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, history: &History) -> Option<&BTreeSet<Sequence>> {
        self.0.get(history)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&History, &BTreeSet<Sequence>)> {
        self.0.iter()
    }
    /// the optimal plays, once the table has been solved down to the root
    pub fn plays(&self) -> Option<&BTreeSet<Sequence>> {
        match self.depth() {
            Some(0) => self.get(&History::root()),
            _ => None,
        }
    }
    /// total continuations across all histories
    pub fn sequences(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}

impl FromIterator<(History, BTreeSet<Sequence>)> for Table {
    fn from_iter<I: IntoIterator<Item = (History, BTreeSet<Sequence>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Table {
    type Item = (History, BTreeSet<Sequence>);
    type IntoIter = std::collections::btree_map::IntoIter<History, BTreeSet<Sequence>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
