//! Demo authentication and session handling.
//!
//! Credentials are checked against a fixed in-process list. A successful
//! login writes a session record next to the event store; the session
//! expires after [`SESSION_TTL_HOURS`].

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EvmanError, EvmanResult};

/// Demo credential list. This is a mock login, not real security.
const DEMO_CREDENTIALS: &[(&str, &str)] = &[("admin", "admin123"), ("user", "user123")];

/// How long a session stays valid after login.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Check a username/password pair against the demo credential list.
///
/// The error is the same regardless of which part was wrong.
pub fn authenticate(username: &str, password: &str) -> EvmanResult<()> {
    let valid = DEMO_CREDENTIALS
        .iter()
        .any(|(u, p)| *u == username && *p == password);

    if valid {
        Ok(())
    } else {
        Err(EvmanError::InvalidCredentials)
    }
}

/// The record identifying the currently authenticated demo user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.logged_in_at > Duration::hours(SESSION_TTL_HOURS)
    }
}

/// File-backed session storage at `<data_dir>/session.json`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Authenticate and persist a fresh session.
    pub fn login(&self, username: &str, password: &str) -> EvmanResult<Session> {
        authenticate(username, password)?;

        let session = Session {
            username: username.to_string(),
            logged_in_at: Utc::now(),
        };
        self.save(&session)?;
        Ok(session)
    }

    fn save(&self, session: &Session) -> EvmanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| EvmanError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// The current session, if a live one exists.
    pub fn current(&self) -> Option<Session> {
        self.current_at(Utc::now())
    }

    /// Like [`current`](Self::current) with an injected clock.
    ///
    /// An expired or unreadable session file is treated as logged out.
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let session: Session = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "session file is not valid JSON, treating as logged out"
                );
                return None;
            }
        };

        if session.is_expired(now) {
            return None;
        }
        Some(session)
    }

    /// The current session, or [`EvmanError::NotLoggedIn`].
    pub fn require(&self) -> EvmanResult<Session> {
        self.current().ok_or(EvmanError::NotLoggedIn)
    }

    /// Remove the session file. Removing an absent session is fine.
    pub fn clear(&self) -> EvmanResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
