use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::{CredentialVerifier, StaticCredentials};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("credential '{0}' must be written as name:password")]
    MalformedCredential(String),
    #[error("credential '{0}' has an empty username")]
    EmptyUsername(String),
}

/// A `name:password` pair accepted by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl FromStr for Credential {
    type Err = ConfigError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let (username, password) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::MalformedCredential(entry.to_string()))?;
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername(entry.to_string()));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub bind_addr: String,
    /// Accounts allowed to log in; empty means the built-in lab account.
    pub credentials: Vec<Credential>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            credentials: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn credential_verifier(&self) -> Arc<dyn CredentialVerifier> {
        if self.credentials.is_empty() {
            return Arc::new(StaticCredentials::lab_default());
        }
        Arc::new(StaticCredentials::new(
            self.credentials
                .iter()
                .map(|c| (c.username.clone(), c.password.clone())),
        ))
    }
}
