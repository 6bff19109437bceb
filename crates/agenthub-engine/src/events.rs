//! System events for state-change subscribers
//!
//! Events are broadcast to all subscribers (a rendering layer, a test
//! harness, a logger). Missing a subscriber is not an error: the core
//! fires and forgets.

use agenthub_types::{Agent, AgentId, Credits, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State-change events emitted by the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SystemEvent {
    /// A session was opened via authentication
    SessionOpened {
        session_id: String,
        name: String,
        credits: Credits,
        timestamp: DateTime<Utc>,
    },

    /// The session was closed via logout
    SessionClosed {
        session_id: String,
        timestamp: DateTime<Utc>,
    },

    /// Credits were debited from the session
    CreditsDebited {
        session_id: String,
        amount: Credits,
        remaining: Credits,
        timestamp: DateTime<Utc>,
    },

    /// An invocation entered the pending state
    InvocationStarted {
        agent_id: AgentId,
        agent_name: String,
        cost: Credits,
        timestamp: DateTime<Utc>,
    },

    /// An invocation settled successfully
    InvocationCompleted {
        agent_id: AgentId,
        agent_name: String,
        cost: Credits,
        timestamp: DateTime<Utc>,
    },

    /// An invocation was rejected
    InvocationRejected {
        agent_id: AgentId,
        agent_name: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl SystemEvent {
    pub fn session_opened(session: &Session) -> Self {
        Self::SessionOpened {
            session_id: session.id.clone(),
            name: session.name.clone(),
            credits: session.credits,
            timestamp: Utc::now(),
        }
    }

    pub fn session_closed(session_id: impl Into<String>) -> Self {
        Self::SessionClosed {
            session_id: session_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn credits_debited(session: &Session, amount: Credits) -> Self {
        Self::CreditsDebited {
            session_id: session.id.clone(),
            amount,
            remaining: session.credits,
            timestamp: Utc::now(),
        }
    }

    pub fn invocation_started(agent: &Agent) -> Self {
        Self::InvocationStarted {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            cost: agent.cost,
            timestamp: Utc::now(),
        }
    }

    pub fn invocation_completed(agent: &Agent) -> Self {
        Self::InvocationCompleted {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            cost: agent.cost,
            timestamp: Utc::now(),
        }
    }

    pub fn invocation_rejected(agent: &Agent, reason: impl Into<String>) -> Self {
        Self::InvocationRejected {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}
