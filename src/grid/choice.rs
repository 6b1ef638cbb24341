use crate::Arbitrary;
use crate::Probability;
use serde::Serialize;
use std::cmp::Ordering;

/// an exact point of [0,1], kept as a reduced fraction.
/// every candidate is rational by construction (k/d shifted by a rational ε),
/// so equality and ordering never go through floating point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice(u64, u64);

impl From<(u64, u64)> for Choice {
    fn from((n, d): (u64, u64)) -> Self {
        assert!(d != 0, "zero denominator");
        assert!(n <= d, "choice {}/{} outside [0,1]", n, d);
        let g = crate::gcd(n as u128, d as u128) as u64;
        Self(n / g, d / g)
    }
}

impl From<Choice> for Probability {
    fn from(choice: Choice) -> Self {
        choice.0 as Probability / choice.1 as Probability
    }
}

impl Choice {
    pub fn zero() -> Self {
        Self(0, 1)
    }
    pub fn one() -> Self {
        Self(1, 1)
    }
    pub fn numer(&self) -> u64 {
        self.0
    }
    pub fn denom(&self) -> u64 {
        self.1
    }
    /// the mirror image x → 1 − x
    pub fn reflect(&self) -> Self {
        Self(self.1 - self.0, self.1)
    }
    /// x + δ, or None if it leaves [0,1]
    pub fn raise(&self, delta: Self) -> Option<Self> {
        let (n, d) = Self::common(*self, delta);
        let sum = n.0 + n.1;
        (sum <= d).then(|| Self::narrow(sum, d))
    }
    /// x − δ, or None if it leaves [0,1]
    pub fn lower(&self, delta: Self) -> Option<Self> {
        let (n, d) = Self::common(*self, delta);
        n.0.checked_sub(n.1).map(|diff| Self::narrow(diff, d))
    }
    /// numerators of both operands over their common denominator
    fn common(a: Self, b: Self) -> ((u128, u128), u128) {
        let (an, ad) = (a.0 as u128, a.1 as u128);
        let (bn, bd) = (b.0 as u128, b.1 as u128);
        let d = ad / crate::gcd(ad, bd) * bd;
        ((an * (d / ad), bn * (d / bd)), d)
    }
    fn narrow(n: u128, d: u128) -> Self {
        let g = crate::gcd(n, d);
        Self::from(((n / g) as u64, (d / g) as u64))
    }
}

impl Ord for Choice {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0 as u128 * other.1 as u128;
        let rhs = other.0 as u128 * self.1 as u128;
        lhs.cmp(&rhs)
    }
}
impl PartialOrd for Choice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        let d = rand::random_range(1..=1000u64);
        let n = rand::random_range(0..=d);
        Self::from((n, d))
    }
}

/// decimal rounded to a fixed number of digits, trailing zeros trimmed
impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = format!("{:.*}", crate::DISPLAY_DIGITS, Probability::from(*self));
        let s = s.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced() {
        assert_eq!(Choice::from((2, 4)), Choice::from((1, 2)));
        assert_eq!(Choice::from((0, 7)), Choice::zero());
        assert_eq!(Choice::from((5, 5)), Choice::one());
    }

    #[test]
    fn ordering() {
        let third = Choice::from((1, 3));
        let half = Choice::from((1, 2));
        assert!(third < half);
        assert!(Choice::zero() < third);
        assert!(half < Choice::one());
    }

    #[test]
    fn perturbation() {
        let half = Choice::from((1, 2));
        let eps = Choice::from((1, 10_000_000));
        let below = half.lower(eps).unwrap();
        let above = half.raise(eps).unwrap();
        assert_eq!(below, Choice::from((4_999_999, 10_000_000)));
        assert_eq!(above, Choice::from((5_000_001, 10_000_000)));
        assert!(below < half && half < above);
    }

    #[test]
    fn boundaries() {
        let eps = Choice::from((1, 10));
        assert_eq!(Choice::zero().lower(eps), None);
        assert_eq!(Choice::one().raise(eps), None);
        assert_eq!(Choice::one().lower(eps), Some(Choice::from((9, 10))));
    }

    #[test]
    fn reflection() {
        for _ in 0..100 {
            let x = Choice::random();
            assert_eq!(x.reflect().reflect(), x);
            assert_eq!(x.raise(x.reflect()), Some(Choice::one()));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Choice::from((1, 2)).to_string(), "0.5");
        assert_eq!(Choice::from((4_999_999, 10_000_000)).to_string(), "0.4999999");
        assert_eq!(Choice::from((1, 3)).to_string(), "0.3333333333");
        assert_eq!(Choice::zero().to_string(), "0");
        assert_eq!(Choice::one().to_string(), "1");
        assert_eq!(format!("{:?}", Choice::from((3, 4))), "3/4");
    }
}
