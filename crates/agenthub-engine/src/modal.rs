//! Overlay (modal) controller
//!
//! Exactly one of {no overlay, auth overlay, result overlay} is displayed
//! at any time. The controller holds a single discriminated value, so the
//! mutual exclusion is structural, not conventional.

use serde::{Deserialize, Serialize};

/// Which face the authentication overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// The single overlay value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    /// No overlay is open
    #[default]
    None,
    /// The authentication form
    Auth(AuthMode),
    /// The invocation result text
    Result(String),
}

/// Governs which overlay flow is active
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    current: Overlay,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently open overlay
    pub fn overlay(&self) -> &Overlay {
        &self.current
    }

    /// Open the authentication overlay in `mode`, replacing any overlay
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.current = Overlay::Auth(mode);
    }

    /// Swap login/register while the auth overlay is open; no-op otherwise
    pub fn toggle_auth_mode(&mut self) {
        if let Overlay::Auth(mode) = &self.current {
            self.current = Overlay::Auth(mode.toggled());
        }
    }

    /// Open the result overlay with `text`, replacing any overlay
    pub fn show_result(&mut self, text: impl Into<String>) {
        self.current = Overlay::Result(text.into());
    }

    /// Close whatever overlay is open
    pub fn dismiss(&mut self) {
        self.current = Overlay::None;
    }
}
