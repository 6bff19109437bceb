//! Catalog entry types
//!
//! Agents and categories are immutable: they are defined at process start
//! and never created or destroyed at runtime.

use crate::Credits;
use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a catalog agent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// String identifier of a category (e.g. `"analytics"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// The synthetic category that matches every agent
    pub const ALL: &'static str = "all";

    /// Create a category id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The synthetic "all" category
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Whether this is the synthetic "all" category
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog agent: a simulated automated service invocable for a credit cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique, stable identifier
    pub id: AgentId,
    /// Display name; also the key for canned result lookup
    pub name: String,
    /// What the agent claims to do
    pub description: String,
    /// Category this agent belongs to (never the synthetic "all")
    pub category: CategoryId,
    /// Credits debited per invocation, strictly positive
    pub cost: Credits,
    /// Average review rating in [0, 5]
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
}

/// A browsable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Display name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_is_recognized() {
        assert!(CategoryId::all().is_all());
        assert!(!CategoryId::new("analytics").is_all());
    }

    #[test]
    fn agent_round_trips_through_json() {
        let agent = Agent {
            id: AgentId(1),
            name: "Test Agent".into(),
            description: "Does test things".into(),
            category: CategoryId::new("utilities"),
            cost: Credits::new(20),
            rating: 4.8,
            reviews: 4200,
        };
        let json = serde_json::to_string(&agent).unwrap();
        let back: Agent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, agent);
    }
}
