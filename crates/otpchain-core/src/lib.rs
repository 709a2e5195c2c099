//! otpchain Core
//!
//! Locates a TOTP shared secret across layered sources and turns it into
//! one-time passwords.
//!
//! ## Secret chains
//!
//! A caller asks "what is the secret?", "persist this secret" or "forget this
//! secret" without knowing where it lives. Sources implement any subset of
//! `Getter`, `Setter` and `Deleter`; chains compose them:
//! - `GetterChain`: first non-empty value wins
//! - `ProviderChain`: first non-empty value wins, writes and deletes fan out
//!   to every member and stop at the first error
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use otpchain_core::keyring::MemoryKeyring;
//! use otpchain_core::{
//!     Context, EnvSecret, Generator, KeyringSecret, Provider, ProviderChain, Secret, Setter, TotpGenerator,
//! };
//!
//! let keyring = Arc::new(MemoryKeyring::new());
//! let chain = Arc::new(ProviderChain::new([
//!     Some(Arc::new(EnvSecret::new("OTPCHAIN_TOTP_SECRET")) as Arc<dyn Provider>),
//!     Some(Arc::new(KeyringSecret::new("alice@example.com", keyring)) as Arc<dyn Provider>),
//! ]));
//! let ctx = Context::background();
//!
//! chain.set(&ctx, &Secret::from("NBSWY3DP"), "Example")?;
//! let otp = TotpGenerator::new(chain).generate_otp(&ctx)?;
//! println!("{}", otp);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;
pub mod secrets;
pub mod keyring;
pub mod logging;
pub mod generator;
pub mod config;

// Re-export commonly used types
pub use types::{Secret, Otp, Context, MarshalText, UnmarshalText};

pub use secrets::{
    Getter, Setter, Deleter, Provider, SecretError, SecretResult,
    EnvSecret, MemorySecret, KeyringSecret, GetterChain, ProviderChain,
    TOTP_SERVICE,
};

pub use generator::{Generator, TotpGenerator, generate_totp, OtpError, OtpResult};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, TracingLogger};
