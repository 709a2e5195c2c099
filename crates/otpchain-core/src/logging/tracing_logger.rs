//! Bridge from the structured [`Logger`] trait to `tracing`

use super::traits::{render_fields, Field, Logger};
use crate::types::Context;

/// Logger that emits `tracing` events under the `otpchain` target
///
/// Field names in `tracing` must be static, so the dynamic key/value pairs
/// are rendered into a single `fields` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, ctx: &Context, message: &str, fields: &[Field<'_>]) {
        tracing::debug!(target: "otpchain", cancelled = ctx.is_cancelled(), fields = %render_fields(fields), "{}", message);
    }

    fn info(&self, ctx: &Context, message: &str, fields: &[Field<'_>]) {
        tracing::info!(target: "otpchain", cancelled = ctx.is_cancelled(), fields = %render_fields(fields), "{}", message);
    }

    fn warn(&self, ctx: &Context, message: &str, fields: &[Field<'_>]) {
        tracing::warn!(target: "otpchain", cancelled = ctx.is_cancelled(), fields = %render_fields(fields), "{}", message);
    }

    fn error(&self, ctx: &Context, message: &str, fields: &[Field<'_>]) {
        tracing::error!(target: "otpchain", cancelled = ctx.is_cancelled(), fields = %render_fields(fields), "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::field;

    #[test]
    fn test_tracing_logger_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("otpchain=debug")
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger::new();
            let ctx = Context::background();
            logger.debug(&ctx, "debug message", &[]);
            logger.error(&ctx, "could not get totp secret from keyring", &[field("account", &"alice")]);
        });
    }
}
