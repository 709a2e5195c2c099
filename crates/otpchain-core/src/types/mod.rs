//! Core value types shared by every module

mod secret;
mod otp;
mod context;

pub use secret::{Secret, MarshalText, UnmarshalText, BoxError};
pub use otp::Otp;
pub use context::Context;
