//! Invocation state
//!
//! Each agent progresses `Idle → Pending → {completed, rejected}` and the
//! terminal states immediately return to `Idle`; only `Pending` is ever
//! stored. The per-agent map makes the "independent per agent" concurrency
//! property explicit: distinct agents may be pending simultaneously, one
//! agent never is twice.

use agenthub_types::Credits;
use serde::{Deserialize, Serialize};

/// Observable invocation state of a single agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvocationState {
    /// No invocation in flight
    #[default]
    Idle,
    /// An invocation is in flight; further invokes are rejected
    Pending,
}

impl InvocationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// How a permitted `invoke` resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// No session was active; the auth overlay was opened instead.
    /// Nothing was debited and no pending state was entered.
    AuthRequired,
    /// The agent ran and the cost was debited
    Completed {
        /// Canned result text now showing in the result overlay
        result: String,
        /// Credits debited from the session
        debited: Credits,
    },
}
