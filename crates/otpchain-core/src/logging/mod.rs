//! Logging abstractions injected into secret providers

mod traits;
mod noop;
mod console;
mod tracing_logger;

pub use traits::{Logger, Field, field, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use tracing_logger::TracingLogger;
