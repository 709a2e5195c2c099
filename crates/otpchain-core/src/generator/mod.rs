//! One-time password generation
//!
//! `TotpGenerator` pulls the current secret from any [`Getter`](crate::Getter),
//! the current time from a [`Clock`], and hands both to a [`DeriveCode`]
//! implementation (RFC 6238 by default).

mod error;
mod traits;
mod clock;
mod derive;
mod totp;

pub use error::{OtpError, OtpResult, DeriveError};
pub use traits::Generator;
pub use clock::{Clock, SystemClock, FixedClock};
pub use derive::{DeriveCode, Rfc6238};
pub use totp::{TotpGenerator, generate_totp};
