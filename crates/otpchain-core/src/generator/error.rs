//! Generator error types

use thiserror::Error;

/// Errors from code derivation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("invalid totp secret encoding: {0}")]
    MalformedSecret(String),

    #[error("time {0} is before the unix epoch")]
    TimeBeforeEpoch(i64),
}

/// Errors from [`Generator::generate_otp`](super::Generator::generate_otp)
///
/// Every message starts with `could not generate otp: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// No source in the getter chain had a secret
    #[error("could not generate otp: no totp secret")]
    NoTotpSecret,

    #[error("could not generate otp: {0}")]
    Derive(#[source] DeriveError),
}

pub type OtpResult<T> = Result<T, OtpError>;
