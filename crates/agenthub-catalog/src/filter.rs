//! The filter engine
//!
//! Derives the visible agent subset from the selected category and search
//! text. Pure and deterministic: no side effects, no hidden state, catalog
//! order preserved.

use agenthub_types::{Agent, CategoryId};

/// Filter `agents` down to those matching `category` and `search`.
///
/// An agent passes when both hold:
/// - `category` is the synthetic "all" OR equals the agent's category
/// - `search` is empty OR is a case-insensitive substring of the agent's
///   name or description
///
/// Search text is matched literally; whitespace-only input is a real query.
pub fn filter<'a>(agents: &'a [Agent], category: &CategoryId, search: &str) -> Vec<&'a Agent> {
    let needle = search.to_lowercase();
    agents
        .iter()
        .filter(|agent| category.is_all() || agent.category == *category)
        .filter(|agent| {
            needle.is_empty()
                || agent.name.to_lowercase().contains(&needle)
                || agent.description.to_lowercase().contains(&needle)
        })
        .collect()
}
