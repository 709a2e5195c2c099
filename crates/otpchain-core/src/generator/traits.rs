//! Generator trait definition

use super::error::OtpResult;
use crate::types::{Context, Otp};

/// A one-time password generator
pub trait Generator: Send + Sync {
    fn generate_otp(&self, ctx: &Context) -> OtpResult<Otp>;
}
