//! Keyring storage boundary
//!
//! - `KeyringBackend`: byte-level `get`/`set`/`delete` keyed by (service, account)
//! - `OsKeyring`: the platform credential store via the `keyring` crate
//! - `MemoryKeyring`: process-local backend for tests and headless hosts
//! - `TypedStorage`: typed values on top of a backend, with text encoding dispatch

mod backend;
mod codec;
mod storage;

pub use backend::{KeyringBackend, BackendError, OsKeyring, MemoryKeyring};
pub use codec::{StorageValue, Payload, Slot, CodecError, encode, decode};
pub use storage::{TypedStorage, StorageError, StorageResult};
