//! Console logger implementation

use super::traits::{render_fields, Field, Logger};
use crate::types::Context;

/// A logger that outputs to the console (stdout/stderr)
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[otpchain]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, level: &str, message: &str, fields: &[Field<'_>]) -> String {
        if fields.is_empty() {
            format!("{} {}: {}", self.prefix, level, message)
        } else {
            format!("{} {}: {} {}", self.prefix, level, message, render_fields(fields))
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, _ctx: &Context, message: &str, fields: &[Field<'_>]) {
        eprintln!("{}", self.line("DEBUG", message, fields));
    }

    fn info(&self, _ctx: &Context, message: &str, fields: &[Field<'_>]) {
        println!("{}", self.line("INFO", message, fields));
    }

    fn warn(&self, _ctx: &Context, message: &str, fields: &[Field<'_>]) {
        eprintln!("{}", self.line("WARN", message, fields));
    }

    fn error(&self, _ctx: &Context, message: &str, fields: &[Field<'_>]) {
        eprintln!("{}", self.line("ERROR", message, fields));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::field;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[otpchain]");

        let custom = ConsoleLogger::with_prefix("[MyApp]");
        assert_eq!(custom.prefix, "[MyApp]");
    }

    #[test]
    fn test_console_logger_line_format() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.line("INFO", "hello", &[]), "[otpchain] INFO: hello");
        assert_eq!(
            logger.line("ERROR", "could not read", &[field("account", &"alice")]),
            "[otpchain] ERROR: could not read account=alice"
        );
    }

    #[test]
    fn test_console_logger_logs() {
        let logger = ConsoleLogger::new();
        let ctx = Context::background();
        logger.debug(&ctx, "debug message", &[]);
        logger.info(&ctx, "info message", &[]);
        logger.warn(&ctx, "warn message", &[]);
        logger.error(&ctx, "error message", &[field("error", &"boom")]);
    }
}
