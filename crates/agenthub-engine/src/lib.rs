//! AgentHub Engine - the session/credit state machine
//!
//! This crate wires the catalog, session store, and overlay controller into
//! the invocation workflow:
//!
//! - `Marketplace`: the facade exposing one handler per raw UI event and
//!   query methods for the rendering layer
//! - `ModalController`: the single discriminated overlay value
//! - `ProcessingDelay`: the injectable simulated agent latency
//! - `SystemEvent`: broadcast notifications for state changes
//!
//! # Concurrency
//!
//! The original environment is single-threaded and cooperative; this engine
//! does not rely on that. Core state lives behind a mutex that is released
//! across the processing delay and re-acquired before settlement, and the
//! debit re-validates the balance, so the non-negative invariant holds even
//! under a preemptive runtime.

pub mod delay;
pub mod events;
pub mod invocation;
pub mod marketplace;
pub mod modal;
pub mod notify;

pub use delay::*;
pub use events::*;
pub use invocation::*;
pub use marketplace::*;
pub use modal::*;
pub use notify::*;
