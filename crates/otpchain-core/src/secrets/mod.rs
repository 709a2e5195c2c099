//! Secret capabilities and the sources that implement them
//!
//! This module provides:
//! - `Getter`, `Setter`, `Deleter` capabilities and their conjunction `Provider`
//! - Built-in sources: `EnvSecret`, `MemorySecret`, `KeyringSecret` and the
//!   literal `Secret` itself
//! - `GetterChain` (fallback reads) and `ProviderChain` (fallback reads,
//!   fail-fast fan-out writes)

mod traits;
mod env_store;
mod memory_store;
mod chain_store;
mod keychain_store;

pub use traits::{Getter, Setter, Deleter, Provider, SecretError, SecretResult};
pub use env_store::EnvSecret;
pub use memory_store::MemorySecret;
pub use chain_store::{GetterChain, ProviderChain};
pub use keychain_store::{KeyringSecret, TOTP_SERVICE};
