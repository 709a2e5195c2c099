//! Typed values on top of a byte-level keyring backend

use std::marker::PhantomData;
use std::sync::Arc;

use thiserror::Error;

use super::backend::{BackendError, KeyringBackend};
use super::codec::{decode, encode, CodecError, StorageValue};
use crate::types::Context;

/// Errors from [`TypedStorage`], each prefixed with the failing stage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to marshal data for writing to keyring: {0}")]
    Marshal(#[source] CodecError),

    #[error("failed to write data to keyring: {0}")]
    Write(#[source] BackendError),

    #[error("failed to read data from keyring: {0}")]
    Read(#[source] BackendError),

    #[error("failed to unmarshal data read from keyring: {0}")]
    Unmarshal(#[source] CodecError),

    #[error("failed to delete data from keyring: {0}")]
    Delete(#[source] BackendError),
}

impl StorageError {
    /// True when the backend had no entry for the key
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::Write(e) | StorageError::Read(e) | StorageError::Delete(e) => e.is_not_found(),
            StorageError::Marshal(_) | StorageError::Unmarshal(_) => false,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Stores values of type `V` in a keyring backend
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use otpchain_core::keyring::{MemoryKeyring, TypedStorage};
/// use otpchain_core::{Context, Secret};
///
/// let storage = TypedStorage::<Secret>::new(Arc::new(MemoryKeyring::new()));
/// let ctx = Context::background();
///
/// storage.set(&ctx, "service", "alice", &Secret::from("NBSWY3DP")).unwrap();
/// assert_eq!(storage.get(&ctx, "service", "alice").unwrap(), Secret::from("NBSWY3DP"));
/// ```
pub struct TypedStorage<V> {
    backend: Arc<dyn KeyringBackend>,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for TypedStorage<V> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            _value: PhantomData,
        }
    }
}

impl<V> std::fmt::Debug for TypedStorage<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedStorage")
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

impl<V: StorageValue + Default> TypedStorage<V> {
    pub fn new(backend: Arc<dyn KeyringBackend>) -> Self {
        Self {
            backend,
            _value: PhantomData,
        }
    }

    /// Encode `value` and write it under (service, account)
    pub fn set(&self, ctx: &Context, service: &str, account: &str, value: &V) -> StorageResult<()> {
        let data = encode(value).map_err(StorageError::Marshal)?;
        self.backend
            .set(ctx, service, account, &data)
            .map_err(StorageError::Write)
    }

    /// Read and decode the value under (service, account)
    pub fn get(&self, ctx: &Context, service: &str, account: &str) -> StorageResult<V> {
        let data = self
            .backend
            .get(ctx, service, account)
            .map_err(StorageError::Read)?;
        let mut dest = V::default();
        decode(data, &mut dest).map_err(StorageError::Unmarshal)?;
        Ok(dest)
    }

    pub fn delete(&self, ctx: &Context, service: &str, account: &str) -> StorageResult<()> {
        self.backend
            .delete(ctx, service, account)
            .map_err(StorageError::Delete)
    }
}
