//! Chained secret sources with fallback reads and fan-out writes

use std::sync::Arc;

use super::memory_store::MemorySecret;
use super::traits::{Deleter, Getter, Provider, SecretResult, Setter};
use crate::types::{Context, Secret};

/// Ordered fallback over getters
///
/// `get` returns the first member value that is not [`Secret::EMPTY`], or
/// `EMPTY` when every member (or no member) has one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use otpchain_core::{Context, EnvSecret, Getter, GetterChain, Secret};
///
/// let chain = GetterChain::new([
///     Some(Arc::new(EnvSecret::new("OTPCHAIN_DOC_UNSET")) as Arc<dyn Getter>),
///     None,
///     Some(Arc::new(Secret::from("NBSWY3DP")) as Arc<dyn Getter>),
/// ]);
///
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.get(&Context::background()), Secret::from("NBSWY3DP"));
/// ```
#[derive(Clone, Default)]
pub struct GetterChain {
    members: Vec<Arc<dyn Getter>>,
}

impl GetterChain {
    /// Build a chain, dropping `None` members and splicing nested chains
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Option<Arc<dyn Getter>>>,
    {
        members.into_iter().flatten().collect()
    }

    pub fn members(&self) -> &[Arc<dyn Getter>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Arc<dyn Getter>> for GetterChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Getter>>>(iter: I) -> Self {
        let mut members = Vec::new();
        for getter in iter {
            if let Some(chain) = getter.as_getter_chain() {
                members.extend(chain.members.iter().cloned());
                continue;
            }
            members.push(getter);
        }
        Self { members }
    }
}

impl Getter for GetterChain {
    fn get(&self, ctx: &Context) -> Secret {
        first_present(self.members.iter().map(|m| m.get(ctx)))
    }

    fn as_getter_chain(&self) -> Option<&GetterChain> {
        Some(self)
    }
}

impl std::fmt::Debug for GetterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetterChain")
            .field("members", &format!("[{} getters]", self.members.len()))
            .finish()
    }
}

/// Ordered chain of providers
///
/// - `get`: first member value that is not [`Secret::EMPTY`]
/// - `set`/`delete`: called on every member in order, stopping at and
///   returning the first error; later members are not called
///
/// Earlier members are the more authoritative layers, so a failed write
/// there must not be masked by a successful write further down.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use otpchain_core::{Context, Getter, MemorySecret, Provider, ProviderChain, Secret, Setter};
///
/// let primary = Arc::new(MemorySecret::default());
/// let chain = ProviderChain::new([
///     Some(primary.clone() as Arc<dyn Provider>),
///     Some(Arc::new(Secret::from("DEFAULT")) as Arc<dyn Provider>),
/// ]);
/// let ctx = Context::background();
///
/// // The literal default answers until the primary has a value
/// assert_eq!(chain.get(&ctx), Secret::from("DEFAULT"));
///
/// chain.set(&ctx, &Secret::from("NBSWY3DP"), "issuer").unwrap();
/// assert_eq!(primary.get(&ctx), Secret::from("NBSWY3DP"));
/// ```
#[derive(Clone, Default)]
pub struct ProviderChain {
    members: Vec<Arc<dyn Provider>>,
}

impl ProviderChain {
    /// Build a chain
    ///
    /// `None` members are dropped, nested provider chains are spliced in and
    /// bare literal secrets are replaced by a [`MemorySecret`] seeded with
    /// their value.
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Option<Arc<dyn Provider>>>,
    {
        members.into_iter().flatten().collect()
    }

    pub fn members(&self) -> &[Arc<dyn Provider>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Arc<dyn Provider>> for ProviderChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Provider>>>(iter: I) -> Self {
        let mut members: Vec<Arc<dyn Provider>> = Vec::new();
        for provider in iter {
            if let Some(chain) = provider.as_provider_chain() {
                members.extend(chain.members.iter().cloned());
                continue;
            }
            match provider.as_literal().cloned() {
                Some(literal) => members.push(Arc::new(MemorySecret::new(literal))),
                None => members.push(provider),
            }
        }
        Self { members }
    }
}

impl Getter for ProviderChain {
    fn get(&self, ctx: &Context) -> Secret {
        first_present(self.members.iter().map(|m| m.get(ctx)))
    }
}

impl Setter for ProviderChain {
    fn set(&self, ctx: &Context, secret: &Secret, issuer: &str) -> SecretResult<()> {
        self.members
            .iter()
            .try_for_each(|m| m.set(ctx, secret, issuer))
    }
}

impl Deleter for ProviderChain {
    fn delete(&self, ctx: &Context) -> SecretResult<()> {
        self.members.iter().try_for_each(|m| m.delete(ctx))
    }
}

impl Provider for ProviderChain {
    fn as_provider_chain(&self) -> Option<&ProviderChain> {
        Some(self)
    }
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("members", &format!("[{} providers]", self.members.len()))
            .finish()
    }
}

// Lazily evaluated: members after the first hit are not queried.
fn first_present(mut secrets: impl Iterator<Item = Secret>) -> Secret {
    secrets.find(|s| *s != Secret::EMPTY).unwrap_or_default()
}
