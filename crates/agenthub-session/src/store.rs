//! The session store
//!
//! Owns the single current `Session` and every mutation of it. State is
//! write-through: authenticate and debit persist to the vault before
//! returning, so a reload (a fresh store over the same vault) observes the
//! latest balance.

use crate::SessionVault;
use agenthub_types::{Credits, MarketError, Result, Session, SESSION_KEY, STARTING_CREDITS};
use std::sync::Arc;
use uuid::Uuid;

/// Holds the authenticated identity and credit balance.
///
/// The store never calls back into a notify sink: callers typically hold a
/// state lock around these operations, and user-facing notices belong after
/// that lock is released.
pub struct SessionStore {
    vault: Arc<dyn SessionVault>,
    current: Option<Session>,
}

impl SessionStore {
    /// Create a store over `vault`, rehydrating any persisted session.
    pub fn new(vault: Arc<dyn SessionVault>) -> Self {
        let current = Self::load(vault.as_ref());
        if let Some(session) = &current {
            tracing::info!(session_id = %session.id, credits = %session.credits, "session rehydrated");
        }
        Self { vault, current }
    }

    /// Read the persisted session, if any. Malformed data yields `None`,
    /// never an error.
    pub fn load(vault: &dyn SessionVault) -> Option<Session> {
        let raw = vault.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%err, "persisted session is malformed, treating as absent");
                None
            }
        }
    }

    /// The current session, if authenticated
    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Whether a session is active
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticate and open a fresh session.
    ///
    /// Always succeeds in this simulated environment: the password is
    /// accepted but never verified. `name` defaults to the local part of
    /// `email`. The new session replaces any current one, is persisted,
    /// and starts with 1000 credits.
    pub fn authenticate(
        &mut self,
        email: &str,
        _password: &str,
        name: Option<&str>,
    ) -> Session {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => Session::name_from_email(email),
        };
        let session = Session {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.to_string(),
            credits: STARTING_CREDITS,
        };
        self.replace(Some(session.clone()));
        tracing::info!(session_id = %session.id, name = %session.name, "session opened");
        session
    }

    /// Close the current session and remove its persisted representation.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(session_id = %session.id, "session closed");
        }
        self.vault.remove(SESSION_KEY);
    }

    /// Debit `amount` from the current balance.
    ///
    /// Fails with `InsufficientCredits` when the balance does not cover
    /// the amount and with `NoActiveSession` when anonymous; both leave
    /// the balance untouched. On success the updated session is persisted
    /// before it is returned.
    pub fn debit(&mut self, amount: Credits) -> Result<Session> {
        let current = self.current.as_ref().ok_or(MarketError::NoActiveSession)?;
        let remaining = current.credits.checked_sub(amount).ok_or(
            MarketError::InsufficientCredits {
                required: amount,
                available: current.credits,
            },
        )?;
        let mut updated = current.clone();
        updated.credits = remaining;
        self.replace(Some(updated.clone()));
        tracing::info!(
            session_id = %updated.id,
            debited = %amount,
            remaining = %remaining,
            "credits debited"
        );
        Ok(updated)
    }

    /// Replace the in-memory session and write through to the vault.
    fn replace(&mut self, session: Option<Session>) {
        match &session {
            Some(session) => {
                // serialization of a plain struct cannot fail
                let raw = serde_json::to_string(session).unwrap_or_default();
                self.vault.put(SESSION_KEY, &raw);
            }
            None => self.vault.remove(SESSION_KEY),
        }
        self.current = session;
    }
}
