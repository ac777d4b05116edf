//! Session and authorization service.
//!
//! Holds the current authenticated identity and exposes login/logout.
//! The session is an explicit, injected object — created at startup,
//! passed to whatever needs it, dropped at teardown. No ambient global.
//!
//! Key properties:
//! - `login` looks the user up by email in the directory; a match alone
//!   establishes the session. The credential is accepted unverified —
//!   a deliberate mock inherited from the reference front end. Any
//!   deployment handling real data must verify it here.
//! - Login failure is a recoverable outcome with a generic message that
//!   does not reveal whether the email exists.
//! - `logout` is unconditional and idempotent.

use crate::models::{Role, User};
use crate::store::ResourceStore;

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Deliberately vague: never discloses whether the email is known.
    #[error("incorrect credentials")]
    InvalidCredentials,
}

// ═══════════════════════════════════════════════════════════
// SessionService
// ═══════════════════════════════════════════════════════════

/// The current authenticated identity, or no session.
pub struct SessionService {
    current: Option<User>,
}

impl SessionService {
    /// Start with no session.
    pub fn new() -> Self {
        Self { current: None }
    }

    // ── Login / logout ───────────────────────────────────

    /// Authenticate against the user directory.
    ///
    /// Mock contract: a matching email is sufficient; `_password` is not
    /// verified. On success the session is established and the matched
    /// user returned. On failure the session is left unchanged.
    pub async fn login(
        &mut self,
        directory: &ResourceStore<User>,
        email: &str,
        _password: &str,
    ) -> Result<User, AuthError> {
        match directory.iter().find(|u| u.email == email) {
            Some(user) => {
                let user = user.clone();
                tracing::info!(role = user.role.as_str(), "session established");
                self.current = Some(user.clone());
                Ok(user)
            }
            None => {
                tracing::warn!("login rejected: unknown identifier");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Clear the session. Safe to call with no session.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("session cleared");
        }
    }

    // ── Queries ──────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
