//! Notifier implementations
//!
//! The `Notifier` trait itself lives in `agenthub-types`; this module adds
//! the implementation that routes notices into `tracing`.

use agenthub_types::{NoticeKind, Notifier};

/// Routes notices to `tracing` at a level matching their kind
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Error => tracing::warn!(target: "agenthub::notice", "{message}"),
            NoticeKind::Info | NoticeKind::Success | NoticeKind::Loading => {
                tracing::info!(target: "agenthub::notice", kind = ?kind, "{message}")
            }
        }
    }
}
