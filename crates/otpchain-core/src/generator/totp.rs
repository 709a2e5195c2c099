//! TOTP generator over a secret getter

use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::derive::{DeriveCode, Rfc6238};
use super::error::{OtpError, OtpResult};
use super::traits::Generator;
use crate::secrets::Getter;
use crate::types::{Context, Otp, Secret};

/// Generates time-based one-time passwords
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::{TimeZone, Utc};
/// use otpchain_core::generator::FixedClock;
/// use otpchain_core::{Context, Generator, Secret, TotpGenerator};
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// let generator = TotpGenerator::new(Arc::new(Secret::from("NBSWY3DP")))
///     .with_clock(Arc::new(clock));
///
/// let otp = generator.generate_otp(&Context::background()).unwrap();
/// assert_eq!(otp.as_str(), "191882");
/// ```
pub struct TotpGenerator {
    getter: Arc<dyn Getter>,
    clock: Arc<dyn Clock>,
    deriver: Arc<dyn DeriveCode>,
}

impl TotpGenerator {
    /// Create a generator reading the system clock and deriving RFC 6238 codes
    pub fn new(getter: Arc<dyn Getter>) -> Self {
        Self {
            getter,
            clock: Arc::new(SystemClock),
            deriver: Arc::new(Rfc6238),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_deriver(mut self, deriver: Arc<dyn DeriveCode>) -> Self {
        self.deriver = deriver;
        self
    }
}

impl Generator for TotpGenerator {
    fn generate_otp(&self, ctx: &Context) -> OtpResult<Otp> {
        let secret = self.getter.get(ctx);
        if secret == Secret::EMPTY {
            return Err(OtpError::NoTotpSecret);
        }

        self.deriver
            .derive(secret.as_str(), self.clock.now())
            .map(Otp::new)
            .map_err(OtpError::Derive)
    }
}

impl std::fmt::Debug for TotpGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TotpGenerator").finish_non_exhaustive()
    }
}

/// Generate one code from `getter` with the system clock
pub fn generate_totp(ctx: &Context, getter: Arc<dyn Getter>) -> OtpResult<Otp> {
    TotpGenerator::new(getter).generate_otp(ctx)
}
