//! Error types for AgentHub
//!
//! All errors are explicit. Every failure path leaves the system in a
//! well-defined prior state: no partial debits, no stuck invocations.

use crate::{AgentId, Credits};
use thiserror::Error;

/// Result type for AgentHub operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// AgentHub error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Balance does not cover the requested debit
    #[error("Insufficient credits: required {required}, available {available}")]
    InsufficientCredits {
        required: Credits,
        available: Credits,
    },

    /// A debit was attempted with no authenticated session.
    /// The invocation engine gates on session presence first, so reaching
    /// this is a programming-contract violation, not a user error.
    #[error("No active session")]
    NoActiveSession,

    /// An invocation is already in flight for this agent
    #[error("Agent {agent_id} already has an invocation in flight")]
    InvocationPending { agent_id: AgentId },

    /// Unknown agent id
    #[error("Agent {agent_id} not found in catalog")]
    AgentNotFound { agent_id: AgentId },
}

impl MarketError {
    /// Get an error code for logs and event payloads
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientCredits { .. } => "INSUFFICIENT_CREDITS",
            Self::NoActiveSession => "NO_ACTIVE_SESSION",
            Self::InvocationPending { .. } => "INVOCATION_PENDING",
            Self::AgentNotFound { .. } => "AGENT_NOT_FOUND",
        }
    }

    /// Whether the user can recover by acting differently (as opposed to a
    /// contract violation inside the core)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NoActiveSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let err = MarketError::InsufficientCredits {
            required: Credits::new(25),
            available: Credits::new(10),
        };
        assert_eq!(err.error_code(), "INSUFFICIENT_CREDITS");
        assert_eq!(MarketError::NoActiveSession.error_code(), "NO_ACTIVE_SESSION");
    }

    #[test]
    fn insufficient_credits_message_names_both_amounts() {
        let err = MarketError::InsufficientCredits {
            required: Credits::new(25),
            available: Credits::new(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn contract_violations_are_not_recoverable() {
        assert!(!MarketError::NoActiveSession.is_recoverable());
        assert!(MarketError::InvocationPending { agent_id: AgentId(1) }.is_recoverable());
    }
}
