use crate::Choice;
use crate::Probability;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Add;
use std::ops::Div;
use std::ops::Sub;

/// an exact, non-negative win probability (or average of them).
/// kept reduced so that derived equality is value equality, which is
/// what tie detection between candidates relies on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Share(u128, u128);

impl From<(u128, u128)> for Share {
    fn from((n, d): (u128, u128)) -> Self {
        assert!(d != 0, "zero denominator");
        let g = crate::gcd(n, d);
        Self(n / g, d / g)
    }
}

impl From<Choice> for Share {
    fn from(choice: Choice) -> Self {
        Self::from((choice.numer() as u128, choice.denom() as u128))
    }
}

impl From<Share> for Probability {
    fn from(share: Share) -> Self {
        share.0 as Probability / share.1 as Probability
    }
}

impl Share {
    pub fn zero() -> Self {
        Self(0, 1)
    }
    pub fn one() -> Self {
        Self(1, 1)
    }
    pub fn half(self) -> Self {
        Self::from((self.0, self.1 * 2))
    }
    /// exact arithmetic mean. None for an empty iterator.
    pub fn mean<I>(shares: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let (sum, n) = shares
            .into_iter()
            .fold((Self::zero(), 0usize), |(sum, n), s| (sum + s, n + 1));
        (n > 0).then(|| sum / n)
    }
}

impl Add for Share {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let d = self.1 / crate::gcd(self.1, rhs.1) * rhs.1;
        Self::from((self.0 * (d / self.1) + rhs.0 * (d / rhs.1), d))
    }
}

impl Sub for Share {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let d = self.1 / crate::gcd(self.1, rhs.1) * rhs.1;
        let lhs = self.0 * (d / self.1);
        let rhs = rhs.0 * (d / rhs.1);
        Self::from((lhs.checked_sub(rhs).expect("negative share"), d))
    }
}

impl Div<usize> for Share {
    type Output = Self;
    fn div(self, n: usize) -> Self {
        Self::from((self.0, self.1 * n as u128))
    }
}

impl std::iter::Sum for Share {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Ord for Share {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 * other.1).cmp(&(other.0 * self.1))
    }
}
impl PartialOrd for Share {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", crate::DISPLAY_DIGITS, Probability::from(*self))
    }
}

impl std::fmt::Debug for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u128, d: u128) -> Share {
        Share::from((n, d))
    }

    #[test]
    fn arithmetic() {
        assert_eq!(s(1, 3) + s(1, 6), s(1, 2));
        assert_eq!(s(3, 4) - s(1, 4), s(1, 2));
        assert_eq!(s(1, 2).half(), s(1, 4));
        assert_eq!(s(2, 3) / 4, s(1, 6));
    }

    #[test]
    fn ordering() {
        assert!(s(1, 3) < s(1, 2));
        assert!(s(4_999_999, 10_000_000) < s(1, 2));
        assert_eq!(s(2, 4).cmp(&s(1, 2)), Ordering::Equal);
    }

    #[test]
    fn mean() {
        assert_eq!(Share::mean([s(1, 4), s(3, 4)]), Some(s(1, 2)));
        assert_eq!(Share::mean([s(1, 3), s(1, 3), s(1, 3)]), Some(s(1, 3)));
        assert_eq!(Share::mean(std::iter::empty::<Share>()), None);
    }

    #[test]
    fn sum() {
        let total = [s(1, 6), s(1, 3), s(1, 2)].into_iter().sum::<Share>();
        assert_eq!(total, Share::one());
    }

    #[test]
    #[should_panic(expected = "negative share")]
    fn underflow() {
        let _ = s(1, 4) - s(1, 2);
    }
}
