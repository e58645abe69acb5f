//! Exact branch-and-bound bounds.
//!
//! A bound is the negated optimistic objective reachable from a node, so
//! "smaller is better" under a min-first frontier. Fractional relaxations
//! produce rationals; keeping them exact means pruning never depends on float
//! rounding and every trace stays integer-only.

use std::cmp::Ordering;

use serde::Serialize;

/// Negated optimistic objective of a node.
///
/// Finite bounds are kept in lowest terms with a positive denominator, so
/// structural equality agrees with numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bound {
    /// `numer / denom`.
    Finite { numer: i128, denom: u64 },
    /// The node violates a hard constraint. Worse than every finite bound.
    Infeasible,
}

impl Bound {
    /// The bound `-value`: exactly `value` is reachable and nothing more.
    #[must_use]
    pub fn from_value(value: u64) -> Self {
        Self::Finite {
            numer: -i128::from(value),
            denom: 1,
        }
    }

    /// The bound `numer / denom`, reduced to lowest terms.
    ///
    /// A zero denominator yields [`Bound::Infeasible`].
    #[must_use]
    pub fn ratio(numer: i128, denom: u64) -> Self {
        if denom == 0 {
            return Self::Infeasible;
        }
        let g = gcd(numer.unsigned_abs(), u128::from(denom));
        // g divides denom, so both quotients fit their input types.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let (numer, denom) = ((numer / g as i128), (u128::from(denom) / g) as u64);
        Self::Finite { numer, denom }
    }

    #[must_use]
    pub fn is_feasible(self) -> bool {
        matches!(self, Self::Finite { .. })
    }

    /// `true` if a node with this bound could still beat an incumbent worth
    /// `incumbent_value`, i.e. the bound is strictly better than
    /// `-incumbent_value`.
    #[must_use]
    pub fn improves_on(self, incumbent_value: u64) -> bool {
        self < Self::from_value(incumbent_value)
    }

    /// Approximate value for display. `Infeasible` maps to `+inf`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Finite { numer, denom } => numer as f64 / denom as f64,
            Self::Infeasible => f64::INFINITY,
        }
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Infeasible, Self::Infeasible) => Ordering::Equal,
            (Self::Infeasible, Self::Finite { .. }) => Ordering::Greater,
            (Self::Finite { .. }, Self::Infeasible) => Ordering::Less,
            (
                Self::Finite {
                    numer: an,
                    denom: ad,
                },
                Self::Finite {
                    numer: bn,
                    denom: bd,
                },
            ) => (an * i128::from(*bd)).cmp(&(bn * i128::from(*ad))),
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite { numer, denom: 1 } => write!(f, "{numer}"),
            Self::Finite { numer, denom } => write!(f, "{numer}/{denom}"),
            Self::Infeasible => f.write_str("infeasible"),
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
