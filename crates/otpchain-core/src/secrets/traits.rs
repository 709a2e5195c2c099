//! Core traits and types for secret capabilities

use thiserror::Error;

use super::chain_store::{GetterChain, ProviderChain};
use crate::keyring::StorageError;
use crate::types::{Context, Secret};

/// Errors that can occur when writing or deleting a secret
#[derive(Error, Debug)]
pub enum SecretError {
    /// The source refuses writes (for example a literal secret)
    #[error("secret source is read-only")]
    ReadOnly,

    #[error("invalid environment variable name {0:?}")]
    InvalidEnvVar(String),

    /// The value cannot be stored in the named variable (it contains NUL)
    #[error("invalid value for environment variable {0:?}")]
    InvalidEnvValue(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SecretError {
    pub fn is_read_only(&self) -> bool {
        matches!(self, SecretError::ReadOnly)
    }
}

pub type SecretResult<T> = Result<T, SecretError>;

/// Read capability
///
/// `get` never fails. Backend problems are logged by the implementation and
/// reported as [`Secret::EMPTY`]; turning absence into an error is left to
/// the consumer (see [`crate::generator::TotpGenerator`]).
pub trait Getter: Send + Sync {
    fn get(&self, ctx: &Context) -> Secret;

    /// Chain-assembly hook: `Some` when this getter is itself a chain, so
    /// [`GetterChain::new`] can splice its members instead of nesting.
    fn as_getter_chain(&self) -> Option<&GetterChain> {
        None
    }
}

/// Write capability
pub trait Setter: Send + Sync {
    /// Persist `secret`. `issuer` is metadata that a source may ignore.
    fn set(&self, ctx: &Context, secret: &Secret, issuer: &str) -> SecretResult<()>;
}

/// Delete capability
pub trait Deleter: Send + Sync {
    fn delete(&self, ctx: &Context) -> SecretResult<()>;
}

/// A source offering all three capabilities
pub trait Provider: Getter + Setter + Deleter {
    /// Chain-assembly hook, see [`Getter::as_getter_chain`].
    fn as_provider_chain(&self) -> Option<&ProviderChain> {
        None
    }

    /// Chain-assembly hook: `Some` for a bare literal secret, which
    /// [`ProviderChain::new`] replaces with a writable in-memory surrogate.
    fn as_literal(&self) -> Option<&Secret> {
        None
    }
}

impl Getter for Secret {
    fn get(&self, _ctx: &Context) -> Secret {
        self.clone()
    }
}

impl Setter for Secret {
    fn set(&self, _ctx: &Context, _secret: &Secret, _issuer: &str) -> SecretResult<()> {
        Err(SecretError::ReadOnly)
    }
}

impl Deleter for Secret {
    fn delete(&self, _ctx: &Context) -> SecretResult<()> {
        Err(SecretError::ReadOnly)
    }
}

impl Provider for Secret {
    fn as_literal(&self) -> Option<&Secret> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_its_own_getter() {
        let ctx = Context::background();
        assert_eq!(Secret::from("NBSWY3DP").get(&ctx), Secret::from("NBSWY3DP"));
        assert_eq!(Secret::EMPTY.get(&ctx), Secret::EMPTY);
    }

    #[test]
    fn test_secret_is_read_only() {
        let ctx = Context::background();
        let secret = Secret::from("NBSWY3DP");

        let err = secret.set(&ctx, &Secret::from("OTHER"), "issuer").unwrap_err();
        assert!(err.is_read_only());
        assert!(secret.delete(&ctx).unwrap_err().is_read_only());
        assert_eq!(secret.get(&ctx), Secret::from("NBSWY3DP"));
    }

    #[test]
    fn test_storage_errors_pass_through() {
        use crate::keyring::BackendError;

        let err = SecretError::from(StorageError::Delete(BackendError::NotFound));
        assert!(!err.is_read_only());
        assert_eq!(err.to_string(), "failed to delete data from keyring: secret not found in keyring");
    }
}
