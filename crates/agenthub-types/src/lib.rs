//! AgentHub Types - Canonical domain types for the agent marketplace
//!
//! This crate contains all foundational types for AgentHub with zero
//! dependencies on other agenthub crates. It defines:
//!
//! - Identity types (`AgentId`, `CategoryId`)
//! - The `Credits` currency type (non-negative by construction)
//! - Catalog entries (`Agent`, `Category`)
//! - The authenticated `Session`
//! - The `Notifier` seam toward the presentation layer
//! - Error types and the crate-wide `Result` alias
//!
//! # Architectural Invariants
//!
//! 1. `Credits` is unsigned — a balance can never go negative
//! 2. A `Session` mutates only through the session store, never in place
//! 3. Every failure is explicit: no panicking paths in the core

pub mod agent;
pub mod credits;
pub mod error;
pub mod notify;
pub mod session;

pub use agent::*;
pub use credits::*;
pub use error::*;
pub use notify::*;
pub use session::*;
