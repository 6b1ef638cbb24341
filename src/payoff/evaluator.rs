use super::share::Share;
use crate::Choice;

/// probability that `x` is strictly the closest of `{x} ∪ others`
/// to a target drawn uniformly from [0,1].
///
/// `x` owns half the gap to each neighbour, plus the whole stretch to a
/// boundary when it is the outermost value on that side:
///
/// - left of everyone:  x + (m − x)/2
/// - right of everyone: (1 − x) + (x − M)/2
/// - in between:        (x − left)/2 + (right − x)/2
///
/// all values must be distinct and `others` non-empty. distinctness is
/// guaranteed by construction (plays are permutations of a candidate set)
/// and only checked in debug builds.
pub fn prob_win(x: Choice, others: &[Choice]) -> Share {
    debug_assert!(!others.is_empty(), "no opponents");
    debug_assert!(!others.contains(&x), "duplicate choice {}", x);
    let left = others.iter().filter(|&&o| o < x).max().copied();
    let right = others.iter().filter(|&&o| o > x).min().copied();
    let x = Share::from(x);
    match (left, right) {
        (None, Some(m)) => x + (Share::from(m) - x).half(),
        (Some(m), None) => (Share::one() - x) + (x - Share::from(m)).half(),
        (Some(l), Some(r)) => (x - Share::from(l)).half() + (Share::from(r) - x).half(),
        (None, None) => unreachable!("prob_win without opponents"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Candidates;
    use crate::Resolution;

    fn c(n: u64, d: u64) -> Choice {
        Choice::from((n, d))
    }

    /// n distinct random choices
    fn distinct(n: usize) -> Vec<Choice> {
        let mut choices = Vec::new();
        while choices.len() < n {
            let choice = Choice::random();
            if !choices.contains(&choice) {
                choices.push(choice);
            }
        }
        choices
    }

    #[test]
    fn leftmost() {
        // 0.2 against 0.6 owns [0, 0.4]
        assert_eq!(prob_win(c(1, 5), &[c(3, 5)]), Share::from((2, 5)));
    }

    #[test]
    fn rightmost() {
        // 0.75 against 0.25 owns [0.5, 1]
        assert_eq!(prob_win(c(3, 4), &[c(1, 4)]), Share::from((1, 2)));
    }

    #[test]
    fn between() {
        // 0.5 between 0.3 and 0.7 owns [0.4, 0.6]
        let others = [c(3, 10), c(7, 10)];
        assert_eq!(prob_win(c(1, 2), &others), Share::from((1, 5)));
    }

    #[test]
    fn endpoints() {
        assert_eq!(prob_win(Choice::zero(), &[Choice::one()]), Share::from((1, 2)));
        assert_eq!(prob_win(Choice::one(), &[Choice::zero()]), Share::from((1, 2)));
        assert_eq!(prob_win(Choice::zero(), &[c(1, 2), Choice::one()]), Share::from((1, 4)));
    }

    #[test]
    fn reflection() {
        for _ in 0..256 {
            let mut choices = distinct(1 + rand::random_range(1..5));
            let x = choices.pop().unwrap();
            let mirrored = choices.iter().map(Choice::reflect).collect::<Vec<_>>();
            assert_eq!(prob_win(x, &choices), prob_win(x.reflect(), &mirrored));
        }
    }

    #[test]
    fn partition() {
        for _ in 0..256 {
            let choices = distinct(2 + rand::random_range(0..5));
            let total = (0..choices.len())
                .map(|i| {
                    let mut others = choices.clone();
                    let x = others.remove(i);
                    prob_win(x, &others)
                })
                .sum::<Share>();
            assert!(total <= Share::one());
            assert_eq!(total, Share::one());
        }
    }

    #[test]
    fn flat_inside_gap() {
        // anywhere strictly inside (0.3, 0.7) owns exactly half the gap
        let others = [c(3, 10), c(7, 10)];
        let half = prob_win(c(1, 2), &others);
        assert_eq!(half, Share::from((1, 5)));
        Candidates::from(&Resolution::new(vec![10], 10_000_000).unwrap())
            .iter()
            .copied()
            .filter(|&x| x > c(3, 10) && x < c(7, 10))
            .for_each(|x| assert_eq!(prob_win(x, &others), half));
    }

    #[test]
    fn hugging_outer_neighbour() {
        // the open flanks beat the gap: 0.3 − ε owns [0, 0.3 − ε/2]
        let others = [c(3, 10), c(7, 10)];
        let candidates = Candidates::from(&Resolution::new(vec![10], 10_000_000).unwrap());
        let payoffs = candidates
            .iter()
            .copied()
            .filter(|x| !others.contains(x))
            .map(|x| (x, prob_win(x, &others)))
            .collect::<Vec<_>>();
        let best = payoffs.iter().map(|(_, p)| *p).max().unwrap();
        let argmax = payoffs
            .iter()
            .filter(|(_, p)| *p == best)
            .map(|(x, _)| *x)
            .collect::<Vec<_>>();
        assert_eq!(argmax, vec![c(2_999_999, 10_000_000), c(7_000_001, 10_000_000)]);
        assert!(best > prob_win(c(1, 2), &others));
    }
}
