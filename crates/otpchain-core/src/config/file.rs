//! File-based chain configuration (YAML)
//!
//! Supports user-level (~/.config/otpchain/config.yaml) and workspace-level
//! (.config/otpchain/config.yaml) files.

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{ChainConfig, ConfigResult};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/otpchain/config.yaml)
    User,
    /// Workspace-level config (.config/otpchain/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Reads and writes a [`ChainConfig`] YAML file
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use otpchain_core::config::FileChainConfig;
/// use otpchain_core::keyring::OsKeyring;
/// use otpchain_core::logging::ConsoleLogger;
///
/// let config = FileChainConfig::user().load().unwrap();
/// let chain = config.build(Arc::new(OsKeyring::new()), Arc::new(ConsoleLogger::new()));
/// ```
#[derive(Debug, Clone)]
pub struct FileChainConfig {
    path: PathBuf,
    level: ConfigLevel,
}

impl FileChainConfig {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// Create a user-level config (~/.config/otpchain/config.yaml)
    pub fn user() -> Self {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("otpchain").join("config.yaml"), ConfigLevel::User)
    }

    /// Create a workspace-level config (.config/otpchain/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("otpchain")
            .join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the file; a missing file is an empty chain
    pub fn load(&self) -> ConfigResult<ChainConfig> {
        if !self.path.exists() {
            return Ok(ChainConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        ChainConfig::from_yaml(&content)
    }

    /// Write `config`, creating parent directories as needed
    pub fn save(&self, config: &ChainConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, config.to_yaml()?)?;
        Ok(())
    }
}
