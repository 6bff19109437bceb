//! Credit currency type
//!
//! Credits are the abstract currency consumed per invocation. The type is a
//! thin wrapper over `u64`, so a balance is non-negative by construction;
//! subtraction is checked and surfaces underflow to the caller instead of
//! wrapping.

use serde::{Deserialize, Serialize};

/// A non-negative amount of credits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(u64);

impl Credits {
    /// Zero credits
    pub const ZERO: Credits = Credits(0);

    /// Create a credit amount
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Raw amount
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Whether the balance is empty
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked subtraction; `None` on underflow
    pub fn checked_sub(self, other: Credits) -> Option<Credits> {
        self.0.checked_sub(other.0).map(Credits)
    }

    /// Checked addition; `None` on overflow
    pub fn checked_add(self, other: Credits) -> Option<Credits> {
        self.0.checked_add(other.0).map(Credits)
    }

    /// Whether this balance covers `cost`
    pub fn covers(&self, cost: Credits) -> bool {
        self.0 >= cost.0
    }
}

impl From<u64> for Credits {
    fn from(amount: u64) -> Self {
        Credits(amount)
    }
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sub_underflow_is_none() {
        let balance = Credits::new(10);
        assert_eq!(balance.checked_sub(Credits::new(25)), None);
        assert_eq!(balance.checked_sub(Credits::new(10)), Some(Credits::ZERO));
    }

    #[test]
    fn covers_is_inclusive() {
        let balance = Credits::new(25);
        assert!(balance.covers(Credits::new(25)));
        assert!(balance.covers(Credits::new(24)));
        assert!(!balance.covers(Credits::new(26)));
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Credits::new(1000)).unwrap();
        assert_eq!(json, "1000");
        let back: Credits = serde_json::from_str("1000").unwrap();
        assert_eq!(back, Credits::new(1000));
    }
}
