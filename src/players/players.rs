use serde::Serialize;

/// a validated player count, MIN_PLAYERS ≤ n ≤ MAX_PLAYERS.
///
/// the initial table holds every length-n permutation of the candidates,
/// so the ceiling is enforced at the boundary before any work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Players(usize);

impl TryFrom<usize> for Players {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            n if n < crate::MIN_PLAYERS => Err(anyhow::anyhow!(
                "need at least {} players, got {}",
                crate::MIN_PLAYERS,
                n
            )),
            n if n > crate::MAX_PLAYERS => Err(anyhow::anyhow!(
                "at most {} players are supported, got {}",
                crate::MAX_PLAYERS,
                n
            )),
            n => Ok(Self(n)),
        }
    }
}

impl TryFrom<&str> for Players {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("player count must be a whole number, got {:?}", s))
            .and_then(Self::try_from)
    }
}

impl Players {
    pub fn count(&self) -> usize {
        self.0
    }
    /// display label of a 0-indexed player (e.g., "P1")
    pub fn label(player: usize) -> String {
        format!("P{}", player + 1)
    }
    pub fn labels(&self) -> impl Iterator<Item = String> {
        (0..self.0).map(Self::label)
    }
}

impl std::fmt::Display for Players {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} players", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range() {
        for n in crate::MIN_PLAYERS..=crate::MAX_PLAYERS {
            assert_eq!(Players::try_from(n).unwrap().count(), n);
        }
    }

    #[test]
    fn rejects_too_few() {
        assert!(Players::try_from(0).is_err());
        assert!(Players::try_from(1).is_err());
    }

    #[test]
    fn rejects_too_many() {
        assert!(Players::try_from(crate::MAX_PLAYERS + 1).is_err());
    }

    #[test]
    fn parses() {
        assert_eq!(Players::try_from(" 3\n").unwrap().count(), 3);
        assert!(Players::try_from("three").is_err());
        assert!(Players::try_from("2.5").is_err());
        assert!(Players::try_from("-2").is_err());
        assert!(Players::try_from("1").is_err());
    }

    #[test]
    fn labels() {
        let players = Players::try_from(3).unwrap();
        assert_eq!(players.labels().collect::<Vec<_>>(), vec!["P1", "P2", "P3"]);
        assert_eq!(players.to_string(), "3 players");
    }
}
