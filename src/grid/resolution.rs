use super::choice::Choice;
use serde::Serialize;

/// how finely [0,1] is discretized: which denominators contribute
/// fractions k/d, and how far ε nudges each fraction to either side.
///
/// larger denominator lists approximate the continuous game better,
/// at the price of a factorially larger permutation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    denominators: Vec<u64>,
    epsilon: u64,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            denominators: crate::DENOMINATORS.to_vec(),
            epsilon: crate::EPSILON_INVERSE,
        }
    }
}

impl Resolution {
    /// `epsilon` is the reciprocal 1/ε, so 10_000_000 means ε = 1e-7.
    pub fn new(denominators: Vec<u64>, epsilon: u64) -> anyhow::Result<Self> {
        let resolution = Self {
            denominators,
            epsilon,
        };
        resolution.validate()?;
        Ok(resolution)
    }
    /// neighbouring fractions with denominators up to D sit at least 1/D²
    /// apart, so 2ε < 1/D² keeps every perturbed point strictly between
    /// its neighbours.
    ///
    /// both are also capped, so that k/d ± ε reduces to a u64 fraction.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(d) = self.denominators.iter().find(|&&d| d < 2) {
            return Err(anyhow::anyhow!("denominator {} must be at least 2", d));
        }
        if let Some(d) = self.denominators.iter().find(|&&d| d > crate::MAX_DENOMINATOR) {
            return Err(anyhow::anyhow!(
                "denominator {} exceeds {}",
                d,
                crate::MAX_DENOMINATOR
            ));
        }
        if self.epsilon > crate::MAX_EPSILON_INVERSE {
            return Err(anyhow::anyhow!(
                "epsilon 1/{} is finer than 1/{}",
                self.epsilon,
                crate::MAX_EPSILON_INVERSE
            ));
        }
        let widest = self.denominators.iter().copied().max().unwrap_or(1) as u128;
        let spacing = widest
            .checked_mul(widest)
            .and_then(|d2| d2.checked_mul(2))
            .ok_or_else(|| anyhow::anyhow!("denominator {} is too wide", widest))?;
        if (self.epsilon as u128) <= spacing {
            return Err(anyhow::anyhow!(
                "epsilon 1/{} is too coarse for denominator {}",
                self.epsilon,
                widest
            ));
        }
        Ok(())
    }
    pub fn denominators(&self) -> &[u64] {
        &self.denominators
    }
    pub fn epsilon(&self) -> Choice {
        Choice::from((1, self.epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let resolution = Resolution::default();
        assert!(resolution.validate().is_ok());
        assert_eq!(resolution.denominators(), &[2, 3, 4, 5, 6]);
        assert_eq!(resolution.epsilon(), Choice::from((1, 10_000_000)));
    }

    #[test]
    fn rejects_unit_denominator() {
        assert!(Resolution::new(vec![1, 2], 1000).is_err());
        assert!(Resolution::new(vec![0], 1000).is_err());
    }

    #[test]
    fn rejects_coarse_epsilon() {
        assert!(Resolution::new(vec![10], 200).is_err());
        assert!(Resolution::new(vec![10], 201).is_ok());
        assert!(Resolution::new(vec![], 2).is_err());
        assert!(Resolution::new(vec![], 3).is_ok());
    }

    #[test]
    fn rejects_wide_denominator() {
        let max = crate::MAX_DENOMINATOR;
        assert!(Resolution::new(vec![max], crate::MAX_EPSILON_INVERSE).is_ok());
        assert!(Resolution::new(vec![2, max + 1], crate::MAX_EPSILON_INVERSE).is_err());
        assert!(Resolution::new(vec![u64::MAX], u64::MAX).is_err());
    }

    #[test]
    fn rejects_fine_epsilon() {
        let max = crate::MAX_EPSILON_INVERSE;
        assert!(Resolution::new(vec![3, 4], max).is_ok());
        assert!(Resolution::new(vec![3, 4], max + 1).is_err());
        assert!(Resolution::new(vec![3, 4], 1_000_000_000_000_000_000).is_err());
    }
}
