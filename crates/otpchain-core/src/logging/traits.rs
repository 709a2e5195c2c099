//! Logger trait definition

use std::fmt;
use std::sync::Arc;

use crate::types::Context;

/// A key/value pair attached to a log record
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub key: &'a str,
    pub value: &'a dyn fmt::Display,
}

/// Build a [`Field`]
pub fn field<'a>(key: &'a str, value: &'a dyn fmt::Display) -> Field<'a> {
    Field { key, value }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.key, self.value.to_string())
    }
}

/// Structured logger consumed by the secret providers
///
/// Implementations:
/// - `NoOpLogger`: Silent logger, the default everywhere
/// - `ConsoleLogger`: Logs to stdout/stderr
/// - `TracingLogger`: Forwards to `tracing` events
pub trait Logger: Send + Sync {
    fn debug(&self, ctx: &Context, message: &str, fields: &[Field<'_>]);

    fn info(&self, ctx: &Context, message: &str, fields: &[Field<'_>]);

    fn warn(&self, ctx: &Context, message: &str, fields: &[Field<'_>]);

    fn error(&self, ctx: &Context, message: &str, fields: &[Field<'_>]);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Render fields as `key=value` pairs separated by spaces
pub(crate) fn render_fields(fields: &[Field<'_>]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
