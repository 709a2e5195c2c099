//! Code derivation from a secret and an instant

use chrono::{DateTime, Utc};
use totp_rs::{Algorithm, Secret as EncodedSecret, TOTP};

use super::error::DeriveError;

/// Derives a code from secret text and a point in time
pub trait DeriveCode: Send + Sync {
    fn derive(&self, secret: &str, at: DateTime<Utc>) -> Result<String, DeriveError>;
}

/// RFC 6238 TOTP: HMAC-SHA1, 6 digits, 30 second step
///
/// The secret is base32 text. Surrounding whitespace and `=` padding are
/// ignored and lowercase is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc6238;

const DIGITS: usize = 6;
const STEP_SECONDS: u64 = 30;

impl Rfc6238 {
    fn decode(secret: &str) -> Result<Vec<u8>, DeriveError> {
        let normalized = secret.trim().trim_end_matches('=').to_uppercase();
        EncodedSecret::Encoded(normalized)
            .to_bytes()
            .map_err(|e| DeriveError::MalformedSecret(e.to_string()))
    }
}

impl DeriveCode for Rfc6238 {
    fn derive(&self, secret: &str, at: DateTime<Utc>) -> Result<String, DeriveError> {
        let timestamp = u64::try_from(at.timestamp()).map_err(|_| DeriveError::TimeBeforeEpoch(at.timestamp()))?;
        let key = Self::decode(secret)?;
        // Short secrets are valid for the standard; skip totp-rs's length policy.
        let totp = TOTP::new_unchecked(Algorithm::SHA1, DIGITS, 1, STEP_SECONDS, key);
        Ok(totp.generate(timestamp))
    }
}
