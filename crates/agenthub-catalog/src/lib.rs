//! AgentHub Catalog - The immutable agent listing
//!
//! This crate holds the static side of the marketplace:
//! - The production catalog of agents and categories
//! - Canned textual results keyed by agent name
//! - The pure filter engine deriving the visible agent subset
//!
//! Nothing here has hidden state: the catalog is built once and the filter
//! is a pure function over it.

pub mod catalog;
pub mod filter;
pub mod results;

pub use catalog::*;
pub use filter::*;
pub use results::*;
