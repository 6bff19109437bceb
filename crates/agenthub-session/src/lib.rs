//! AgentHub Session - identity and credit balance
//!
//! This crate owns the authenticated session:
//! - `SessionVault`: the abstract persisted key-value store (localStorage in
//!   the original UI)
//! - `SessionStore`: authentication, logout, and credit debits with
//!   write-through persistence
//!
//! # Invariants
//!
//! - The balance never goes negative: a debit either fully succeeds or
//!   leaves the session untouched
//! - Every credit mutation is persisted before the store accepts another
//!   session-mutating operation
//! - Malformed persisted data is treated as "no session", never an error

pub mod store;
pub mod vault;

pub use store::*;
pub use vault::*;
