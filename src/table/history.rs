use crate::Choice;
use serde::Serialize;

/// the choices of the remaining players, in play order
pub type Sequence = Vec<Choice>;

/// the choices made so far, in play order. player k (0-indexed) moves
/// after a history of length k.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct History(Vec<Choice>);

impl From<Vec<Choice>> for History {
    fn from(choices: Vec<Choice>) -> Self {
        Self(choices)
    }
}

impl From<History> for Vec<Choice> {
    fn from(history: History) -> Self {
        history.0
    }
}

impl History {
    pub fn root() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }
    /// index of the player to move next
    pub fn mover(&self) -> usize {
        self.len()
    }
    /// append the next mover's choice
    pub fn push(&self, choice: Choice) -> Self {
        let mut choices = self.0.clone();
        choices.push(choice);
        Self(choices)
    }
    /// split off the most recent choice. an empty history has none,
    /// which callers must rule out.
    pub fn pop(mut self) -> (Self, Choice) {
        let last = self.0.pop().expect("pop on empty history");
        (self, last)
    }
    /// everything committed once `tail` is played after this history
    pub fn join(&self, tail: &[Choice]) -> Vec<Choice> {
        self.0.iter().chain(tail).copied().collect()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(n: u64, d: u64) -> Choice {
        Choice::from((n, d))
    }

    #[test]
    fn push_pop() {
        let history = History::root().push(c(1, 4)).push(c(3, 4));
        assert_eq!(history.mover(), 2);
        let (prev, last) = history.pop();
        assert_eq!(last, c(3, 4));
        assert_eq!(prev, History::from(vec![c(1, 4)]));
    }

    #[test]
    #[should_panic(expected = "pop on empty history")]
    fn pop_root() {
        History::root().pop();
    }

    #[test]
    fn join() {
        let history = History::from(vec![c(1, 2)]);
        assert_eq!(history.join(&[c(1, 4), c(3, 4)]), vec![c(1, 2), c(1, 4), c(3, 4)]);
        assert!(History::root().join(&[]).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(History::from(vec![c(1, 4), c(1, 2)]).to_string(), "(0.25, 0.5)");
        assert_eq!(History::root().to_string(), "()");
    }
}
