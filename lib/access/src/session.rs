//! Authentication state as seen by access checks.
//!
//! The authentication backend resolves the current principal asynchronously.
//! Until it has answered, the state is `Loading`; afterwards it is either
//! `SignedOut` or `SignedIn`. Callers pass this state explicitly into the
//! gate rather than the gate looking it up.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::principal::Principal;

/// Current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// The backend has not resolved the session yet.
    #[default]
    Loading,
    /// Resolved, and nobody is signed in.
    SignedOut,
    /// Resolved to a signed-in principal.
    SignedIn(Principal),
}

impl AuthState {
    /// Builds the state from a loading flag and an optional principal.
    ///
    /// While `loading` is set the principal is ignored.
    #[must_use]
    pub fn from_parts(loading: bool, principal: Option<Principal>) -> Self {
        match (loading, principal) {
            (true, _) => Self::Loading,
            (false, None) => Self::SignedOut,
            (false, Some(principal)) => Self::SignedIn(principal),
        }
    }

    /// Builds a resolved state from a stored session, treating expired
    /// sessions as signed out.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) if session.is_valid() => Self::SignedIn(session.principal().clone()),
            _ => Self::SignedOut,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The signed-in principal, if any.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::SignedIn(principal) => Some(principal),
            _ => None,
        }
    }
}

/// Opaque session identifier issued by the authentication backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A resolved session: who is signed in and until when.
///
/// The principal's role is captured when the session is resolved and is not
/// re-read until the backend issues a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    principal: Principal,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `principal` valid for `duration` from now.
    #[must_use]
    pub fn new(id: SessionId, principal: Principal, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            principal,
            created_at: now,
            expires_at: now + duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Extends the session to `duration` from now.
    pub fn extend(&mut self, duration: Duration) {
        self.expires_at = Utc::now() + duration;
    }
}
