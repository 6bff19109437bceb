//! Notify sink seam
//!
//! Transient user-facing messages (toasts in the original UI) leave the core
//! through this trait. The core never consumes a return value: the sink is
//! fire-and-forget.

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
    Loading,
}

/// Fire-and-forget sink for transient user-facing messages
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Notifier that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _kind: NoticeKind) {}
}
