use super::choice::Choice;
use super::resolution::Resolution;
use std::collections::BTreeSet;

/// the finite stand-in for [0,1]: every value a player may pick.
/// ordered and deduplicated, so 2/4 and 1/2 count once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidates(BTreeSet<Choice>);

impl From<&Resolution> for Candidates {
    fn from(resolution: &Resolution) -> Self {
        let eps = resolution.epsilon();
        let ends = [Choice::zero(), Choice::one(), eps, eps.reflect()];
        let inner = resolution
            .denominators()
            .iter()
            .flat_map(|&d| (1..d).map(move |k| Choice::from((k, d))))
            .flat_map(|f| [f.lower(eps), Some(f), f.raise(eps)])
            .flatten();
        ends.into_iter().chain(inner).collect()
    }
}

impl FromIterator<Choice> for Candidates {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Candidates {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, choice: &Choice) -> bool {
        self.0.contains(choice)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.0.iter()
    }
    /// how many ordered plays of n distinct candidates exist,
    /// |C|·(|C|−1)·…·(|C|−n+1)
    /// saturating at u128::MAX.
    pub fn permutations(&self, n: usize) -> u128 {
        (0..n)
            .map(|i| self.len().saturating_sub(i) as u128)
            .fold(1, u128::saturating_mul)
    }
    /// twice the common denominator of all candidates. every win
    /// probability among candidates is a whole multiple of its reciprocal.
    pub fn scale(&self) -> Option<u128> {
        self.0
            .iter()
            .map(|c| c.denom() as u128)
            .try_fold(1u128, |lcm, d| (lcm / crate::gcd(lcm, d)).checked_mul(d))
            .and_then(|lcm| lcm.checked_mul(2))
    }
    /// whether exact induction over n players stays inside u128.
    ///
    /// a mean over at most `permutations(n)` plays has denominator at most
    /// scale · permutations(n), and comparing two such shares multiplies
    /// two of them together.
    pub fn admits(&self, n: usize) -> anyhow::Result<()> {
        self.scale()
            .and_then(|scale| scale.checked_mul(self.permutations(n)))
            .and_then(|bound| bound.checked_mul(bound))
            .map(|_| ())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "{} candidates are too fine to solve exactly for {} players",
                    self.len(),
                    n
                )
            })
    }
}
