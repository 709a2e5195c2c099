//! In-memory secret cell

use parking_lot::RwLock;

use super::traits::{Deleter, Getter, Provider, SecretResult, Setter};
use crate::types::{Context, Secret};

/// A mutable in-memory secret
///
/// [`ProviderChain::new`](super::ProviderChain::new) wraps literal secrets
/// in one of these so they can receive writes. Writes only change this cell;
/// nothing durable is touched and the original literal stays as it was.
///
/// # Thread Safety
///
/// The cell uses `parking_lot::RwLock` internally and is safe to share.
#[derive(Debug, Default)]
pub struct MemorySecret {
    secret: RwLock<Secret>,
}

impl MemorySecret {
    /// Create a cell seeded with `secret`
    pub fn new(secret: Secret) -> Self {
        Self {
            secret: RwLock::new(secret),
        }
    }

    pub fn snapshot(&self) -> Secret {
        self.secret.read().clone()
    }
}

impl Clone for MemorySecret {
    fn clone(&self) -> Self {
        Self::new(self.snapshot())
    }
}

impl Getter for MemorySecret {
    fn get(&self, _ctx: &Context) -> Secret {
        self.snapshot()
    }
}

impl Setter for MemorySecret {
    fn set(&self, _ctx: &Context, secret: &Secret, _issuer: &str) -> SecretResult<()> {
        *self.secret.write() = secret.clone();
        Ok(())
    }
}

impl Deleter for MemorySecret {
    fn delete(&self, _ctx: &Context) -> SecretResult<()> {
        *self.secret.write() = Secret::EMPTY;
        Ok(())
    }
}

impl Provider for MemorySecret {}
