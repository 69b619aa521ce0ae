use crate::config::{ACCESS_KEY_ENV, SECRET_KEY_ENV};
use crate::errors::{Result, SyncError};
use crate::interfaces::{CredentialSource, SecretStore};
use crate::utils::log_utils::mask;
use std::collections::HashMap;
use std::fmt;

/// Access key and secret key for the bucket
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &mask(&self.access_key))
            .field("secret_key", &"****")
            .finish()
    }
}

/// Reads the credential variables a secrets runner exports
pub struct EnvCredentialSource {
    access_key: Option<String>,
    secret_key: Option<String>,
}

impl EnvCredentialSource {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars: HashMap<String, String> = vars.into_iter().collect();
        let mut take = |name: &str| vars.remove(name).filter(|v| !v.trim().is_empty());
        Self {
            access_key: take(ACCESS_KEY_ENV),
            secret_key: take(SECRET_KEY_ENV),
        }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn credentials(&self) -> Result<Credentials> {
        match (&self.access_key, &self.secret_key) {
            (Some(access), Some(secret)) => Ok(Credentials::new(access, secret)),
            (access, secret) => {
                let missing: Vec<&str> = [
                    access.is_none().then_some(ACCESS_KEY_ENV),
                    secret.is_none().then_some(SECRET_KEY_ENV),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(SyncError::MissingCredential(format!(
                    "{} not set in the environment",
                    missing.join(" and ")
                )))
            }
        }
    }
}

/// Reads the two credentials as named secrets from a [`SecretStore`]
pub struct KeyVaultCredentialSource<S: SecretStore> {
    store: S,
    access_key_secret: String,
    secret_key_secret: String,
}

impl<S: SecretStore> KeyVaultCredentialSource<S> {
    pub fn new(store: S, access_key_secret: &str, secret_key_secret: &str) -> Self {
        Self {
            store,
            access_key_secret: access_key_secret.to_string(),
            secret_key_secret: secret_key_secret.to_string(),
        }
    }
}

impl<S: SecretStore> CredentialSource for KeyVaultCredentialSource<S> {
    fn credentials(&self) -> Result<Credentials> {
        let access_key = self.store.get_secret(&self.access_key_secret)?;
        let secret_key = self.store.get_secret(&self.secret_key_secret)?;
        Ok(Credentials::new(access_key.trim(), secret_key.trim()))
    }
}

/// Tries each source in order.
///
/// A source reporting [`SyncError::MissingCredential`] passes to the next one;
/// any other error stops the chain.
pub struct ChainCredentialSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainCredentialSource {
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }
}

impl CredentialSource for ChainCredentialSource {
    fn credentials(&self) -> Result<Credentials> {
        let mut reasons = Vec::new();
        for source in &self.sources {
            match source.credentials() {
                Ok(creds) => return Ok(creds),
                Err(SyncError::MissingCredential(reason)) => reasons.push(reason),
                Err(e) => return Err(e),
            }
        }
        if reasons.is_empty() {
            reasons.push("no credential source configured".to_string());
        }
        Err(SyncError::MissingCredential(format!(
            "{} (run under a secrets runner that exports {} and {}, or pass --vault-name)",
            reasons.join("; "),
            ACCESS_KEY_ENV,
            SECRET_KEY_ENV
        )))
    }
}
