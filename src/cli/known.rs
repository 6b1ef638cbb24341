use crate::Players;

/// closed-form equilibrium of the continuous game, where one is known.
///
/// fixed reference text, not derived from the solved table. the discrete
/// solution approaches it as the candidate grid gets finer.
pub fn known(players: Players) -> Option<&'static [&'static str]> {
    match players.count() {
        2 => Some(&[
            "A : 1/2",
            "B : random selection from {1/2 + ε, 1/2 - ε}",
        ]),
        3 => Some(&[
            "A : random selection from {1/4, 3/4}",
            "B : {1/4 if A == 3/4; 3/4 if A == 1/4}",
            "C : random selection from (1/4, 3/4)",
        ]),
        4 => Some(&[
            "A : random selection from {1/6, 5/6}",
            "B : {1/6 if A == 5/6; 5/6 if A == 1/6}",
            "C : 1/2",
            "D : random selection from (1/6, 1/2) ∪ (1/2, 5/6)",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_player() {
        for n in 2..=4 {
            let players = Players::try_from(n).unwrap();
            assert_eq!(known(players).unwrap().len(), n);
        }
    }

    #[test]
    fn unknown_beyond_four() {
        assert!(known(Players::try_from(5).unwrap()).is_none());
    }
}
