//! No-op logger implementation

use super::traits::{Field, Logger};
use crate::types::Context;

/// A logger that does nothing
///
/// This is what providers use unless a logger is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
    fn info(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
    fn warn(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
    fn error(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
}
