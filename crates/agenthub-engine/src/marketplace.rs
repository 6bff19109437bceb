//! The marketplace facade
//!
//! One handler per raw UI event, plus query methods for whoever renders.
//! The facade owns no rendering: results surface through the overlay value,
//! transient messages through the notify sink, and state changes through
//! the broadcast channel.
//!
//! The core state lock is never held across a `Notifier` callback: a
//! notifier is free to call back into the query methods.

use crate::{
    AuthMode, InvocationOutcome, InvocationState, ModalController, Overlay, ProcessingDelay,
    SystemEvent,
};
use agenthub_catalog::{filter, result_for, Catalog};
use agenthub_session::{MemoryVault, SessionStore, SessionVault};
use agenthub_types::{
    Agent, AgentId, CategoryId, MarketError, NoticeKind, Notifier, NullNotifier, Result, Session,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Everything the facade guards behind one lock.
///
/// The lock is released across the processing delay and re-acquired for
/// settlement; the debit re-validates the balance then, so check-then-debit
/// stays safe even though other operations interleave during the delay.
struct CoreState {
    sessions: SessionStore,
    modal: ModalController,
    invocations: HashMap<AgentId, InvocationState>,
    category: CategoryId,
    search: String,
}

/// Construction parameters for a [`Marketplace`]
pub struct MarketplaceConfig {
    pub catalog: Catalog,
    pub vault: Arc<dyn SessionVault>,
    pub notifier: Arc<dyn Notifier>,
    pub delay: ProcessingDelay,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::production(),
            vault: Arc::new(MemoryVault::new()),
            notifier: Arc::new(NullNotifier),
            delay: ProcessingDelay::default(),
        }
    }
}

/// The session/credit state machine behind the marketplace UI
#[derive(Clone)]
pub struct Marketplace {
    catalog: Catalog,
    state: Arc<Mutex<CoreState>>,
    events: broadcast::Sender<SystemEvent>,
    notifier: Arc<dyn Notifier>,
    delay: ProcessingDelay,
}

impl Marketplace {
    /// Production catalog, in-memory vault, discarding notifier
    pub fn new() -> Self {
        Self::with_config(MarketplaceConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: MarketplaceConfig) -> Self {
        let (events, _) = broadcast::channel(64);
        let sessions = SessionStore::new(config.vault);
        Self {
            catalog: config.catalog,
            state: Arc::new(Mutex::new(CoreState {
                sessions,
                modal: ModalController::new(),
                invocations: HashMap::new(),
                category: CategoryId::all(),
                search: String::new(),
            })),
            events,
            notifier: config.notifier,
            delay: config.delay,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The immutable catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current session, if authenticated
    pub fn session(&self) -> Option<Session> {
        self.state.lock().sessions.session().cloned()
    }

    /// The currently open overlay
    pub fn overlay(&self) -> Overlay {
        self.state.lock().modal.overlay().clone()
    }

    /// Invocation state of one agent
    pub fn invocation_state(&self, agent_id: AgentId) -> InvocationState {
        self.state
            .lock()
            .invocations
            .get(&agent_id)
            .copied()
            .unwrap_or_default()
    }

    /// Whether an invocation of `agent_id` is currently in flight
    pub fn is_pending(&self, agent_id: AgentId) -> bool {
        self.invocation_state(agent_id).is_pending()
    }

    /// Agents matching the current category and search text, catalog order
    pub fn visible_agents(&self) -> Vec<Agent> {
        let state = self.state.lock();
        filter(self.catalog.agents(), &state.category, &state.search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Subscribe to state-change events
    pub fn subscribe(&self) -> broadcast::Receiver<SystemEvent> {
        self.events.subscribe()
    }

    // ── Filtering handlers ────────────────────────────────────────────────

    /// The search text changed
    pub fn search_changed(&self, text: impl Into<String>) {
        self.state.lock().search = text.into();
    }

    /// A category was selected
    pub fn category_selected(&self, category: CategoryId) {
        self.state.lock().category = category;
    }

    // ── Auth handlers ─────────────────────────────────────────────────────

    /// The user asked to sign in or register
    pub fn auth_requested(&self, mode: AuthMode) {
        self.state.lock().modal.open_auth(mode);
    }

    /// The login/register toggle inside the auth overlay
    pub fn auth_mode_toggled(&self) {
        self.state.lock().modal.toggle_auth_mode();
    }

    /// The auth form was submitted. Always succeeds in this simulated
    /// environment; closes the overlay and opens a fresh session.
    pub fn auth_submitted(&self, email: &str, password: &str, name: Option<&str>) -> Session {
        let session = {
            let mut state = self.state.lock();
            let session = state.sessions.authenticate(email, password, name);
            state.modal.dismiss();
            session
        };
        self.notifier.notify(
            &format!("Welcome {}! You have 1,000 credits to start.", session.name),
            NoticeKind::Success,
        );
        self.emit(SystemEvent::session_opened(&session));
        session
    }

    /// Any overlay was dismissed (auth cancel or result continue)
    pub fn overlay_dismissed(&self) {
        self.state.lock().modal.dismiss();
    }

    /// The user logged out
    pub fn logout_requested(&self) {
        let closed = {
            let mut state = self.state.lock();
            let id = state.sessions.session().map(|s| s.id.clone());
            state.sessions.logout();
            id
        };
        self.notifier.notify("Logged out successfully", NoticeKind::Success);
        if let Some(session_id) = closed {
            self.emit(SystemEvent::session_closed(session_id));
        }
    }

    // ── Invocation ────────────────────────────────────────────────────────

    /// The "use agent" trigger.
    ///
    /// Anonymous visitors are routed to the auth overlay (`AuthRequired`,
    /// no cost, no pending state). An underfunded session fails with
    /// `InsufficientCredits` and changes nothing. Otherwise the agent goes
    /// pending, the simulated delay elapses without blocking any other
    /// operation, the cost is debited, and the canned result opens in the
    /// result overlay.
    pub async fn use_agent(&self, agent_id: AgentId) -> Result<InvocationOutcome> {
        let agent = self
            .catalog
            .get(agent_id)
            .cloned()
            .ok_or(MarketError::AgentNotFound { agent_id })?;

        {
            let mut state = self.state.lock();

            let available = match state.sessions.session() {
                Some(session) => session.credits,
                None => {
                    tracing::info!(%agent_id, "invocation requires authentication");
                    state.modal.open_auth(AuthMode::Login);
                    return Ok(InvocationOutcome::AuthRequired);
                }
            };
            if !available.covers(agent.cost) {
                drop(state);
                let err = MarketError::InsufficientCredits {
                    required: agent.cost,
                    available,
                };
                tracing::info!(%agent_id, required = %agent.cost, %available, "invocation underfunded");
                self.notifier.notify(
                    &format!(
                        "Insufficient credits! You need {} credits but only have {}.",
                        agent.cost, available
                    ),
                    NoticeKind::Error,
                );
                self.emit(SystemEvent::invocation_rejected(&agent, err.to_string()));
                return Err(err);
            }

            if state.invocations.contains_key(&agent_id) {
                return Err(MarketError::InvocationPending { agent_id });
            }
            state.invocations.insert(agent_id, InvocationState::Pending);
        }

        tracing::info!(%agent_id, agent = %agent.name, cost = %agent.cost, "invocation pending");
        self.notifier
            .notify("Agent is processing your request...", NoticeKind::Loading);
        self.emit(SystemEvent::invocation_started(&agent));

        // the one suspension point; every other handler stays responsive
        tokio::time::sleep(self.delay.sample()).await;

        self.settle(&agent)
    }

    /// Settle a pending invocation: debit, surface the result or failure.
    fn settle(&self, agent: &Agent) -> Result<InvocationOutcome> {
        let mut state = self.state.lock();
        state.invocations.remove(&agent.id);

        match state.sessions.debit(agent.cost) {
            Ok(updated) => {
                let result = result_for(&agent.name).to_string();
                state.modal.show_result(result.clone());
                drop(state);
                tracing::info!(agent_id = %agent.id, cost = %agent.cost, "invocation completed");
                self.emit(SystemEvent::credits_debited(&updated, agent.cost));
                self.emit(SystemEvent::invocation_completed(agent));
                self.notifier.notify(
                    &format!("{} completed! {} credits used.", agent.name, agent.cost),
                    NoticeKind::Success,
                );
                Ok(InvocationOutcome::Completed {
                    result,
                    debited: agent.cost,
                })
            }
            // the balance was validated at invocation start; reaching this
            // arm means it changed during the delay (e.g. logout). Nothing
            // was debited and nothing is credited back.
            Err(err) => {
                drop(state);
                tracing::warn!(agent_id = %agent.id, code = err.error_code(), "invocation rejected at settlement");
                self.emit(SystemEvent::invocation_rejected(agent, err.to_string()));
                self.notifier.notify(&err.to_string(), NoticeKind::Error);
                Err(err)
            }
        }
    }

    fn emit(&self, event: SystemEvent) {
        // fire-and-forget: no subscriber is a valid state
        let _ = self.events.send(event);
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenthub_types::{Category, Credits};
    use std::time::Duration;

    /// Records every notice for assertions
    #[derive(Clone, Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<(String, NoticeKind)>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NoticeKind) {
            self.0.lock().push((message.to_string(), kind));
        }
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<(String, NoticeKind)> {
            self.0.lock().clone()
        }

        fn has_kind(&self, kind: NoticeKind) -> bool {
            self.0.lock().iter().any(|(_, k)| *k == kind)
        }
    }

    fn market() -> (Marketplace, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let market = Marketplace::with_config(MarketplaceConfig {
            notifier: Arc::new(notifier.clone()),
            delay: ProcessingDelay::none(),
            ..MarketplaceConfig::default()
        });
        (market, notifier)
    }

    /// A two-agent catalog tailored for balance-edge scenarios
    fn edge_catalog(expensive: u64, cheap: u64) -> Catalog {
        let category = CategoryId::new("utilities");
        Catalog::new(
            vec![
                Agent {
                    id: AgentId(1),
                    name: "Expensive Agent".into(),
                    description: "Costs a lot".into(),
                    category: category.clone(),
                    cost: Credits::new(expensive),
                    rating: 4.0,
                    reviews: 10,
                },
                Agent {
                    id: AgentId(2),
                    name: "Cheap Agent".into(),
                    description: "Costs a little".into(),
                    category: category.clone(),
                    cost: Credits::new(cheap),
                    rating: 4.0,
                    reviews: 10,
                },
            ],
            vec![Category { id: category, name: "Utilities".into() }],
        )
    }

    #[tokio::test]
    async fn anonymous_invoke_opens_login_overlay() {
        let (market, notifier) = market();
        let outcome = market.use_agent(AgentId(1)).await.unwrap();
        assert_eq!(outcome, InvocationOutcome::AuthRequired);
        assert_eq!(market.overlay(), Overlay::Auth(AuthMode::Login));
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Idle);
        assert!(market.session().is_none());
        assert!(!notifier.has_kind(NoticeKind::Success));
    }

    #[tokio::test]
    async fn invoke_debits_and_opens_result_overlay() {
        let (market, notifier) = market();
        market.auth_submitted("jane@example.com", "pw", None);
        let outcome = market.use_agent(AgentId(1)).await.unwrap();
        let InvocationOutcome::Completed { result, debited } = outcome else {
            panic!("expected completion");
        };
        assert_eq!(debited, Credits::new(25));
        assert!(result.contains("Customer Support Complete"));
        assert_eq!(market.session().unwrap().credits, Credits::new(975));
        assert_eq!(market.overlay(), Overlay::Result(result));
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Idle);
        let notices = notifier.notices();
        assert!(notices.iter().any(|(_, k)| *k == NoticeKind::Loading));
        assert!(notices
            .iter()
            .any(|(m, k)| *k == NoticeKind::Success && m.contains("25 credits used")));
    }

    #[tokio::test]
    async fn unknown_agent_is_rejected() {
        let (market, _) = market();
        market.auth_submitted("jane@example.com", "pw", None);
        let err = market.use_agent(AgentId(99)).await.unwrap_err();
        assert_eq!(err, MarketError::AgentNotFound { agent_id: AgentId(99) });
    }

    #[tokio::test]
    async fn underfunded_invoke_changes_nothing() {
        let notifier = RecordingNotifier::default();
        let market = Marketplace::with_config(MarketplaceConfig {
            catalog: edge_catalog(990, 25),
            notifier: Arc::new(notifier.clone()),
            delay: ProcessingDelay::none(),
            ..MarketplaceConfig::default()
        });
        market.auth_submitted("jane@example.com", "pw", None);
        // drain to exactly 10 credits
        market.use_agent(AgentId(1)).await.unwrap();
        market.overlay_dismissed();
        assert_eq!(market.session().unwrap().credits, Credits::new(10));

        let err = market.use_agent(AgentId(2)).await.unwrap_err();
        assert_eq!(
            err,
            MarketError::InsufficientCredits {
                required: Credits::new(25),
                available: Credits::new(10),
            }
        );
        assert_eq!(market.session().unwrap().credits, Credits::new(10));
        assert_eq!(market.overlay(), Overlay::None);
        assert_eq!(market.invocation_state(AgentId(2)), InvocationState::Idle);
        assert!(notifier
            .notices()
            .iter()
            .any(|(m, k)| *k == NoticeKind::Error
                && m.contains("need 25 credits")
                && m.contains("only have 10")));
    }

    #[tokio::test]
    async fn exact_balance_succeeds_then_rejects() {
        let market = Marketplace::with_config(MarketplaceConfig {
            catalog: edge_catalog(1000, 1),
            delay: ProcessingDelay::none(),
            ..MarketplaceConfig::default()
        });
        market.auth_submitted("jane@example.com", "pw", None);
        market.use_agent(AgentId(1)).await.unwrap();
        assert_eq!(market.session().unwrap().credits, Credits::ZERO);

        let err = market.use_agent(AgentId(1)).await.unwrap_err();
        assert!(matches!(err, MarketError::InsufficientCredits { .. }));
        assert_eq!(market.session().unwrap().credits, Credits::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn reentrant_invoke_on_pending_agent_is_rejected() {
        let market = Marketplace::with_config(MarketplaceConfig {
            delay: ProcessingDelay::fixed(Duration::from_millis(100)),
            ..MarketplaceConfig::default()
        });
        market.auth_submitted("jane@example.com", "pw", None);

        let first = {
            let market = market.clone();
            tokio::spawn(async move { market.use_agent(AgentId(1)).await })
        };
        tokio::task::yield_now().await;
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Pending);
        assert!(market.is_pending(AgentId(1)));
        assert!(!market.is_pending(AgentId(2)));

        let err = market.use_agent(AgentId(1)).await.unwrap_err();
        assert_eq!(err, MarketError::InvocationPending { agent_id: AgentId(1) });

        first.await.unwrap().unwrap();
        // exactly one debit despite two invokes
        assert_eq!(market.session().unwrap().credits, Credits::new(975));
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Idle);
        assert!(!market.is_pending(AgentId(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_agents_run_concurrently() {
        let market = Marketplace::with_config(MarketplaceConfig {
            delay: ProcessingDelay::fixed(Duration::from_millis(100)),
            ..MarketplaceConfig::default()
        });
        market.auth_submitted("jane@example.com", "pw", None);

        let (one, two) = {
            let (a, b) = (market.clone(), market.clone());
            (
                tokio::spawn(async move { a.use_agent(AgentId(1)).await }),
                tokio::spawn(async move { b.use_agent(AgentId(2)).await }),
            )
        };
        tokio::task::yield_now().await;
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Pending);
        assert_eq!(market.invocation_state(AgentId(2)), InvocationState::Pending);

        one.await.unwrap().unwrap();
        two.await.unwrap().unwrap();
        // 1000 - 25 - 45
        assert_eq!(market.session().unwrap().credits, Credits::new(930));
    }

    #[tokio::test(start_paused = true)]
    async fn logout_during_flight_settles_as_rejected() {
        let market = Marketplace::with_config(MarketplaceConfig {
            delay: ProcessingDelay::fixed(Duration::from_millis(100)),
            ..MarketplaceConfig::default()
        });
        market.auth_submitted("jane@example.com", "pw", None);

        let flight = {
            let market = market.clone();
            tokio::spawn(async move { market.use_agent(AgentId(1)).await })
        };
        tokio::task::yield_now().await;
        market.logout_requested();

        let err = flight.await.unwrap().unwrap_err();
        assert_eq!(err, MarketError::NoActiveSession);
        assert!(market.session().is_none());
        assert_eq!(market.invocation_state(AgentId(1)), InvocationState::Idle);
        // the result overlay never opened
        assert_eq!(market.overlay(), Overlay::None);
    }

    #[tokio::test]
    async fn auth_overlay_flow() {
        let (market, _) = market();
        market.auth_requested(AuthMode::Register);
        assert_eq!(market.overlay(), Overlay::Auth(AuthMode::Register));
        market.auth_mode_toggled();
        assert_eq!(market.overlay(), Overlay::Auth(AuthMode::Login));
        market.overlay_dismissed();
        assert_eq!(market.overlay(), Overlay::None);

        market.auth_requested(AuthMode::Login);
        let session = market.auth_submitted("jane@example.com", "pw", None);
        assert_eq!(session.credits, Credits::new(1000));
        assert_eq!(market.overlay(), Overlay::None);
    }

    #[tokio::test]
    async fn filter_handlers_drive_visible_agents() {
        let (market, _) = market();
        assert_eq!(market.visible_agents().len(), 6);

        market.search_changed("datasets");
        let visible = market.visible_agents();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, AgentId(2));

        market.category_selected(CategoryId::new("email"));
        assert!(market.visible_agents().is_empty());

        market.search_changed("");
        let visible = market.visible_agents();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, AgentId(4));
    }

    #[tokio::test]
    async fn events_are_broadcast_in_order() {
        let (market, _) = market();
        let mut rx = market.subscribe();

        market.auth_submitted("jane@example.com", "pw", None);
        market.use_agent(AgentId(1)).await.unwrap();
        market.logout_requested();

        assert!(matches!(rx.try_recv().unwrap(), SystemEvent::SessionOpened { .. }));
        assert!(matches!(rx.try_recv().unwrap(), SystemEvent::InvocationStarted { .. }));
        match rx.try_recv().unwrap() {
            SystemEvent::CreditsDebited { amount, remaining, .. } => {
                assert_eq!(amount, Credits::new(25));
                assert_eq!(remaining, Credits::new(975));
            }
            other => panic!("expected CreditsDebited, got {other:?}"),
        }
        assert!(matches!(rx.try_recv().unwrap(), SystemEvent::InvocationCompleted { .. }));
        assert!(matches!(rx.try_recv().unwrap(), SystemEvent::SessionClosed { .. }));
    }

    #[tokio::test]
    async fn welcome_and_logout_notices_are_emitted() {
        let (market, notifier) = market();
        market.auth_submitted("jane@example.com", "pw", None);
        market.logout_requested();
        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].0.contains("Welcome jane"));
        assert_eq!(notices[0].1, NoticeKind::Success);
        assert!(notices[1].0.contains("Logged out"));
        assert_eq!(notices[1].1, NoticeKind::Success);
    }

    /// A notifier that calls back into the facade's query methods. Every
    /// handler must have released the state lock before notifying, or this
    /// deadlocks (parking_lot mutexes are not reentrant).
    #[derive(Clone, Default)]
    struct QueryingNotifier {
        market: Arc<Mutex<Option<Marketplace>>>,
        overlays: Arc<Mutex<Vec<Overlay>>>,
    }

    impl Notifier for QueryingNotifier {
        fn notify(&self, _message: &str, _kind: NoticeKind) {
            let market = self.market.lock().clone();
            if let Some(market) = market {
                self.overlays.lock().push(market.overlay());
            }
        }
    }

    #[tokio::test]
    async fn notifier_may_query_state_from_the_callback() {
        let notifier = QueryingNotifier::default();
        let market = Marketplace::with_config(MarketplaceConfig {
            catalog: edge_catalog(1000, 1),
            notifier: Arc::new(notifier.clone()),
            delay: ProcessingDelay::none(),
            ..MarketplaceConfig::default()
        });
        *notifier.market.lock() = Some(market.clone());

        market.auth_submitted("jane@example.com", "pw", None); // welcome
        market.use_agent(AgentId(1)).await.unwrap(); // loading + completed
        market.overlay_dismissed();
        market.use_agent(AgentId(2)).await.unwrap_err(); // underfunded
        market.logout_requested(); // logged out

        assert_eq!(notifier.overlays.lock().len(), 5);
    }

    #[tokio::test]
    async fn reload_over_the_same_vault_restores_the_session() {
        let vault: Arc<dyn SessionVault> = Arc::new(MemoryVault::new());
        let opened = {
            let market = Marketplace::with_config(MarketplaceConfig {
                vault: vault.clone(),
                delay: ProcessingDelay::none(),
                ..MarketplaceConfig::default()
            });
            market.auth_submitted("jane@example.com", "pw", None);
            market.use_agent(AgentId(1)).await.unwrap();
            market.session().unwrap()
        };
        // a fresh marketplace over the same vault simulates a page reload
        let market = Marketplace::with_config(MarketplaceConfig {
            vault,
            ..MarketplaceConfig::default()
        });
        assert_eq!(market.session(), Some(opened));
        assert_eq!(market.session().unwrap().credits, Credits::new(975));
    }
}
