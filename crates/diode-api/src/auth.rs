//! Login credentials and cookie sessions.
//!
//! The HTTP layer never knows where credentials come from: it holds an
//! `Arc<dyn CredentialVerifier>` handed to it at startup.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::http::{header, HeaderMap};
use thiserror::Error;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "diode_lab_session";

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// In-memory username/password table.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new<I, U, P>(users: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// The single lab account shipped with the bench.
    pub fn lab_default() -> Self {
        Self::new([("admin", "science")])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

#[derive(Debug, Error)]
#[error("session store is unavailable")]
pub struct SessionError;

/// How long a login stays valid.
pub const SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone)]
struct Session {
    username: String,
    created: Instant,
}

/// Maps session tokens to logged-in usernames.
///
/// Entries older than the TTL are treated as absent and pruned on every
/// `create`, so the table is bounded by the logins of one TTL window.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn create(&self, username: &str) -> Result<String, SessionError> {
        let token = Uuid::new_v4().simple().to_string();
        let mut sessions = self.sessions.lock().map_err(|_| SessionError)?;
        let ttl = self.ttl;
        sessions.retain(|_, session| session.created.elapsed() < ttl);
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                created: Instant::now(),
            },
        );
        Ok(token)
    }

    pub fn user(&self, token: &str) -> Result<Option<String>, SessionError> {
        let sessions = self.sessions.lock().map_err(|_| SessionError)?;
        Ok(sessions
            .get(token)
            .filter(|session| session.created.elapsed() < self.ttl)
            .map(|session| session.username.clone()))
    }

    pub fn remove(&self, token: &str) -> Result<Option<String>, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError)?;
        Ok(sessions.remove(token).map(|session| session.username))
    }

    /// Stored entries, including expired ones not yet pruned.
    pub fn len(&self) -> Result<usize, SessionError> {
        let sessions = self.sessions.lock().map_err(|_| SessionError)?;
        Ok(sessions.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }
}

/// Session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
        .filter(|token| !token.is_empty())
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_static_credentials() {
        let creds = StaticCredentials::lab_default();
        assert!(creds.verify("admin", "science"));
        assert!(!creds.verify("admin", "Science"));
        assert!(!creds.verify("guest", "science"));
    }

    #[test]
    fn test_session_lifecycle() {
        let store = SessionStore::new();
        let token = store.create("admin").unwrap();
        assert_eq!(token.len(), 32);
        assert_eq!(store.user(&token).unwrap().as_deref(), Some("admin"));
        assert_eq!(store.remove(&token).unwrap().as_deref(), Some("admin"));
        assert!(store.user(&token).unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let a = store.create("admin").unwrap();
        let b = store.create("admin").unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_expired_sessions_are_rejected_and_pruned() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        let stale = store.create("admin").unwrap();
        assert!(store.user(&stale).unwrap().is_none());

        let fresh = store.create("admin").unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.remove(&stale).unwrap().is_none());
        assert_eq!(store.remove(&fresh).unwrap().as_deref(), Some("admin"));
    }

    #[test]
    fn test_poisoned_store_reports_error() {
        let store = std::sync::Arc::new(SessionStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.sessions.lock().unwrap();
            panic!("poison the session lock");
        })
        .join();
        assert!(store.len().is_err());
        assert!(store.is_empty().is_err());
        assert!(store.create("admin").is_err());
    }

    #[test]
    fn test_session_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; diode_lab_session=abc123; other=1"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());
        headers.insert(header::COOKIE, HeaderValue::from_static("diode_lab_session="));
        assert!(session_token(&headers).is_none());
    }
}
