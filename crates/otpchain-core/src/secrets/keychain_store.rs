//! Keyring-backed TOTP secret source
//!
//! Stores the secret in a [`KeyringBackend`] under the service
//! [`TOTP_SERVICE`] and a caller-chosen account:
//! - **macOS**: Keychain
//! - **Windows**: Credential Manager
//! - **Linux**: Secret Service (GNOME Keyring, KWallet)
//!
//! or any other backend injected at construction.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use super::traits::{Deleter, Getter, Provider, SecretResult, Setter};
use crate::keyring::{BackendError, KeyringBackend, StorageError, TypedStorage};
use crate::logging::{field, Logger, NoOpLogger, SharedLogger};
use crate::types::{Context, Secret};

/// Keyring service under which TOTP secrets are stored
pub const TOTP_SERVICE: &str = "otpchain/totp";

/// Secret provider backed by a keyring
///
/// The backend is read at most once for the lifetime of the provider. The
/// first `get` performs the read and every later (or concurrent) call sees
/// the same result. A failed read is logged and remembered as
/// [`Secret::EMPTY`]. Writes and deletes through this provider go to the
/// backend every time and update the remembered value on success.
///
/// An empty account turns the provider into a no-op: reads give `EMPTY` and
/// writes succeed without touching the backend.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use otpchain_core::keyring::MemoryKeyring;
/// use otpchain_core::{Context, Getter, KeyringSecret, Secret, Setter};
///
/// let source = KeyringSecret::new("alice@example.com", Arc::new(MemoryKeyring::new()));
/// let ctx = Context::background();
///
/// source.set(&ctx, &Secret::from("NBSWY3DP"), "Example").unwrap();
/// assert_eq!(source.get(&ctx), Secret::from("NBSWY3DP"));
/// ```
pub struct KeyringSecret {
    account: String,
    storage: TypedStorage<Secret>,
    logger: SharedLogger,
    cached: OnceCell<RwLock<Secret>>,
}

impl KeyringSecret {
    pub fn new(account: impl Into<String>, backend: Arc<dyn KeyringBackend>) -> Self {
        Self {
            account: account.into(),
            storage: TypedStorage::new(backend),
            logger: Arc::new(NoOpLogger),
            cached: OnceCell::new(),
        }
    }

    /// Use `logger` for read, write and delete failures
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Whether the backend has been read (or the value otherwise settled)
    pub fn fetched(&self) -> bool {
        self.cached.get().is_some()
    }

    fn fetch(&self, ctx: &Context) -> Result<RwLock<Secret>, BackendError> {
        match self.storage.get(ctx, TOTP_SERVICE, &self.account) {
            Ok(secret) => Ok(RwLock::new(secret)),
            // Nothing was read; leave the cell empty so a later call can try.
            Err(StorageError::Read(BackendError::Cancelled)) => Err(BackendError::Cancelled),
            Err(err) => {
                self.logger.error(
                    ctx,
                    "could not get totp secret from keyring",
                    &[
                        field("error", &err),
                        field("service", &TOTP_SERVICE),
                        field("account", &self.account),
                    ],
                );
                Ok(RwLock::new(Secret::EMPTY))
            }
        }
    }

    fn remember(&self, secret: Secret) {
        let cell = self.cached.get_or_init(|| RwLock::new(Secret::EMPTY));
        *cell.write() = secret;
    }
}

impl Getter for KeyringSecret {
    fn get(&self, ctx: &Context) -> Secret {
        if self.account.is_empty() {
            return Secret::EMPTY;
        }

        match self.cached.get_or_try_init(|| self.fetch(ctx)) {
            Ok(cell) => cell.read().clone(),
            Err(err) => {
                self.logger.debug(
                    ctx,
                    "skipped totp secret fetch",
                    &[field("error", &err), field("account", &self.account)],
                );
                Secret::EMPTY
            }
        }
    }
}

impl Setter for KeyringSecret {
    fn set(&self, ctx: &Context, secret: &Secret, _issuer: &str) -> SecretResult<()> {
        if self.account.is_empty() {
            return Ok(());
        }

        if let Err(err) = self.storage.set(ctx, TOTP_SERVICE, &self.account, secret) {
            self.logger.error(
                ctx,
                "could not persist totp secret to keyring",
                &[
                    field("error", &err),
                    field("service", &TOTP_SERVICE),
                    field("account", &self.account),
                ],
            );
            return Err(err.into());
        }

        self.remember(secret.clone());
        Ok(())
    }
}

impl Deleter for KeyringSecret {
    fn delete(&self, ctx: &Context) -> SecretResult<()> {
        if self.account.is_empty() {
            return Ok(());
        }

        if let Err(err) = self.storage.delete(ctx, TOTP_SERVICE, &self.account) {
            self.logger.error(
                ctx,
                "could not delete totp secret from keyring",
                &[
                    field("error", &err),
                    field("service", &TOTP_SERVICE),
                    field("account", &self.account),
                ],
            );
            return Err(err.into());
        }

        self.remember(Secret::EMPTY);
        Ok(())
    }
}

impl Provider for KeyringSecret {}

impl std::fmt::Debug for KeyringSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyringSecret")
            .field("service", &TOTP_SERVICE)
            .field("account", &self.account)
            .field("fetched", &self.fetched())
            .finish()
    }
}
