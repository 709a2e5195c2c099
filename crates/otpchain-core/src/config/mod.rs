//! Secret chain configuration
//!
//! Describes a provider chain in YAML and loads it from:
//! - an explicit path
//! - the user config dir (`~/.config/otpchain/config.yaml`)
//! - a workspace (`<root>/.config/otpchain/config.yaml`)

mod traits;
mod file;

pub use traits::{ChainConfig, SourceConfig, ConfigError, ConfigResult};
pub use file::{FileChainConfig, ConfigLevel};
