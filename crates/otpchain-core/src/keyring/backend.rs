//! Byte-level credential stores

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

use crate::types::Context;

/// Errors reported by a [`KeyringBackend`]
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("secret not found in keyring")]
    NotFound,

    #[error("operation cancelled")]
    Cancelled,

    #[error("data passed to set was too big")]
    TooBig,

    #[error("{0}")]
    Platform(String),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound)
    }
}

/// A byte-level store keyed by service and account
///
/// Implementations perform exactly one physical call per operation and never
/// retry.
pub trait KeyringBackend: Send + Sync {
    fn get(&self, ctx: &Context, service: &str, account: &str) -> Result<Vec<u8>, BackendError>;

    fn set(&self, ctx: &Context, service: &str, account: &str, data: &[u8]) -> Result<(), BackendError>;

    fn delete(&self, ctx: &Context, service: &str, account: &str) -> Result<(), BackendError>;
}

/// The operating system credential store
///
/// - **macOS**: Keychain Services
/// - **Windows**: Credential Manager
/// - **Linux**: Secret Service API (GNOME Keyring, KWallet, etc.)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeyring;

impl OsKeyring {
    pub fn new() -> Self {
        Self
    }

    fn entry(ctx: &Context, service: &str, account: &str) -> Result<::keyring::Entry, BackendError> {
        if ctx.is_cancelled() {
            return Err(BackendError::Cancelled);
        }
        ::keyring::Entry::new(service, account).map_err(map_keyring_error)
    }
}

fn map_keyring_error(err: ::keyring::Error) -> BackendError {
    match err {
        ::keyring::Error::NoEntry => BackendError::NotFound,
        ::keyring::Error::TooLong(_, _) => BackendError::TooBig,
        ::keyring::Error::NoStorageAccess(inner) => {
            BackendError::Platform(format!("cannot access keyring storage: {}", inner))
        }
        other => BackendError::Platform(other.to_string()),
    }
}

impl KeyringBackend for OsKeyring {
    fn get(&self, ctx: &Context, service: &str, account: &str) -> Result<Vec<u8>, BackendError> {
        Self::entry(ctx, service, account)?
            .get_secret()
            .map_err(map_keyring_error)
    }

    fn set(&self, ctx: &Context, service: &str, account: &str, data: &[u8]) -> Result<(), BackendError> {
        Self::entry(ctx, service, account)?
            .set_secret(data)
            .map_err(map_keyring_error)
    }

    fn delete(&self, ctx: &Context, service: &str, account: &str) -> Result<(), BackendError> {
        Self::entry(ctx, service, account)?
            .delete_credential()
            .map_err(map_keyring_error)
    }
}

/// In-memory credential store
///
/// Behaves like the OS keyring (including `NotFound` on deleting a missing
/// entry) but lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemoryKeyring {
    entries: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryKeyring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, service: &str, account: &str) -> bool {
        self.entries
            .read()
            .contains_key(&(service.to_string(), account.to_string()))
    }
}

impl KeyringBackend for MemoryKeyring {
    fn get(&self, ctx: &Context, service: &str, account: &str) -> Result<Vec<u8>, BackendError> {
        if ctx.is_cancelled() {
            return Err(BackendError::Cancelled);
        }
        self.entries
            .read()
            .get(&(service.to_string(), account.to_string()))
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    fn set(&self, ctx: &Context, service: &str, account: &str, data: &[u8]) -> Result<(), BackendError> {
        if ctx.is_cancelled() {
            return Err(BackendError::Cancelled);
        }
        self.entries
            .write()
            .insert((service.to_string(), account.to_string()), data.to_vec());
        Ok(())
    }

    fn delete(&self, ctx: &Context, service: &str, account: &str) -> Result<(), BackendError> {
        if ctx.is_cancelled() {
            return Err(BackendError::Cancelled);
        }
        self.entries
            .write()
            .remove(&(service.to_string(), account.to_string()))
            .map(|_| ())
            .ok_or(BackendError::NotFound)
    }
}
