use crate::Players;
use std::time::Duration;

/// what one induction round did, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// 0-indexed player resolved this round
    pub mover: usize,
    /// histories the mover was solved at
    pub histories: usize,
    /// (history, choice) pairs evaluated
    pub branches: usize,
    /// continuations that survived
    pub sequences: usize,
    pub elapsed: Duration,
}

impl Round {
    /// evaluated branches per second
    pub fn rate(&self) -> f64 {
        self.branches as f64 / self.elapsed.as_secs_f64().max(1e-9)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<24}{:<24}{:<24}{:<20}",
            format!("solved {}", Players::label(self.mover)),
            format!("histories {}", self.histories),
            format!("branches {}", self.branches),
            format!("survivors {}", self.sequences),
            format!("B/sec {:.1}", self.rate()),
        )
    }
}
