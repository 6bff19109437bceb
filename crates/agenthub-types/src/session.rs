//! The authenticated session
//!
//! A session is the identity plus credit balance of the signed-in visitor.
//! It is a plain value: the session store owns the single current instance
//! and replaces it wholesale on every mutation.

use crate::Credits;
use serde::{Deserialize, Serialize};

/// Well-known persistence key for the serialized session
pub const SESSION_KEY: &str = "user";

/// Starting balance granted on authentication
pub const STARTING_CREDITS: Credits = Credits::new(1000);

/// An authenticated visitor with a credit balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique per login
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address supplied at authentication
    pub email: String,
    /// Remaining credit balance
    pub credits: Credits,
}

impl Session {
    /// Derive a display name from the local part of an email address.
    ///
    /// `"jane@example.com"` → `"jane"`. An address without `@` is used
    /// verbatim.
    pub fn name_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_local_part_of_email() {
        assert_eq!(Session::name_from_email("jane@example.com"), "jane");
    }

    #[test]
    fn name_without_at_sign_is_verbatim() {
        assert_eq!(Session::name_from_email("jane"), "jane");
    }

    #[test]
    fn persisted_shape_is_self_describing() {
        let session = Session {
            id: "abc123".into(),
            name: "jane".into(),
            email: "jane@example.com".into(),
            credits: Credits::new(975),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["name"], "jane");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["credits"], 975);
    }
}
