use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::models::Id;

/// An authenticated backend session.
///
/// The surrounding shell owns sign-in; everything in this crate receives
/// the session as an explicit argument rather than reading ambient state.
/// The token lives in a `SecretString` so it stays out of debug output.
#[derive(Clone)]
pub struct Session {
    user_id: Id,
    access_token: SecretString,
}

impl Session {
    pub fn new(user_id: Id, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: SecretString::from(access_token.into()),
        }
    }

    pub fn user_id(&self) -> &Id {
        &self.user_id
    }

    /// Raw bearer token for the Authorization header.
    pub fn bearer_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
