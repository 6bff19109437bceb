//! End-to-end walkthrough: authenticate, browse, invoke an agent.
//!
//! Run with `cargo run --example marketplace_demo -p agenthub-engine`.
//! Notices and state transitions surface through `tracing`.

use agenthub_engine::{
    InvocationOutcome, Marketplace, MarketplaceConfig, ProcessingDelay, TracingNotifier,
};
use agenthub_types::AgentId;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let market = Marketplace::with_config(MarketplaceConfig {
        notifier: Arc::new(TracingNotifier),
        delay: ProcessingDelay::fixed(Duration::from_millis(300)),
        ..MarketplaceConfig::default()
    });

    let session = market.auth_submitted("jane@example.com", "demo-password", None);
    println!("signed in as {} with {} credits", session.name, session.credits);

    market.search_changed("data");
    for agent in market.visible_agents() {
        println!("  [{}] {} ({} credits)", agent.id, agent.name, agent.cost);
    }

    match market.use_agent(AgentId(2)).await {
        Ok(InvocationOutcome::Completed { result, debited }) => {
            println!("\n{result}\n\n({debited} credits used)");
        }
        Ok(InvocationOutcome::AuthRequired) => println!("sign in first"),
        Err(err) => eprintln!("invocation failed: {err}"),
    }

    if let Some(session) = market.session() {
        println!("remaining balance: {} credits", session.credits);
    }
}
