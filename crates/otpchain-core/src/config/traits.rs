//! Chain description types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keyring::KeyringBackend;
use crate::logging::SharedLogger;
use crate::secrets::{EnvSecret, KeyringSecret, Provider, ProviderChain};
use crate::types::Secret;

/// One source in a configured chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Environment variable
    Env { var: String },
    /// Keyring entry under the TOTP service
    Keyring { account: String },
    /// A fixed default secret (writable in memory only)
    Literal { secret: String },
}

/// Ordered list of sources, highest priority first
///
/// ```yaml
/// sources:
///   - type: env
///     var: OTPCHAIN_TOTP_SECRET
///   - type: keyring
///     account: alice@example.com
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl ChainConfig {
    pub fn new(sources: Vec<SourceConfig>) -> Self {
        Self { sources }
    }

    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Assemble the provider chain in source order
    ///
    /// Every keyring source shares `backend` and `logger`.
    pub fn build(&self, backend: Arc<dyn KeyringBackend>, logger: SharedLogger) -> ProviderChain {
        ProviderChain::new(self.sources.iter().map(|source| {
            let provider: Arc<dyn Provider> = match source {
                SourceConfig::Env { var } => Arc::new(EnvSecret::new(var.clone())),
                SourceConfig::Keyring { account } => Arc::new(
                    KeyringSecret::new(account.clone(), backend.clone()).with_logger(logger.clone()),
                ),
                SourceConfig::Literal { secret } => Arc::new(Secret::from(secret.as_str())),
            };
            Some(provider)
        }))
    }
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(String),

    #[error("Failed to serialize YAML: {0}")]
    Serialize(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyring::MemoryKeyring;
    use crate::logging::NoOpLogger;
    use crate::secrets::{Getter, Setter, TOTP_SERVICE};
    use crate::types::Context;

    const YAML: &str = r#"
sources:
  - type: env
    var: OTPCHAIN_TEST_CONFIG_UNSET
  - type: keyring
    account: alice
  - type: literal
    secret: DEFAULTSECRET
"#;

    #[test]
    fn test_parse_yaml() {
        let config = ChainConfig::from_yaml(YAML).unwrap();
        assert_eq!(
            config.sources,
            vec![
                SourceConfig::Env { var: "OTPCHAIN_TEST_CONFIG_UNSET".to_string() },
                SourceConfig::Keyring { account: "alice".to_string() },
                SourceConfig::Literal { secret: "DEFAULTSECRET".to_string() },
            ]
        );
    }

    #[test]
    fn test_missing_sources_is_empty() {
        assert_eq!(ChainConfig::from_yaml("{}").unwrap(), ChainConfig::default());
    }

    #[test]
    fn test_unknown_source_type() {
        let err = ChainConfig::from_yaml("sources:\n  - type: vault\n    path: x\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ChainConfig::from_yaml(YAML).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("type: keyring"));
        assert_eq!(ChainConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_build_chain_order_and_fallback() {
        let backend = Arc::new(MemoryKeyring::new());
        let chain = ChainConfig::from_yaml(YAML)
            .unwrap()
            .build(backend.clone(), Arc::new(NoOpLogger));
        let ctx = Context::background();

        assert_eq!(chain.len(), 3);
        // Env unset and keyring empty: the literal default answers
        assert_eq!(chain.get(&ctx), Secret::from("DEFAULTSECRET"));
    }

    #[test]
    fn test_build_chain_keyring_wins_over_literal() {
        use crate::keyring::KeyringBackend;

        let backend = Arc::new(MemoryKeyring::new());
        backend
            .set(&Context::background(), TOTP_SERVICE, "alice", b"FROMKEYRING")
            .unwrap();
        let chain = ChainConfig::new(vec![
            SourceConfig::Keyring { account: "alice".to_string() },
            SourceConfig::Literal { secret: "DEFAULTSECRET".to_string() },
        ])
        .build(backend, Arc::new(NoOpLogger));

        assert_eq!(chain.get(&Context::background()), Secret::from("FROMKEYRING"));
    }

    #[test]
    fn test_build_chain_writes_reach_keyring() {
        let backend = Arc::new(MemoryKeyring::new());
        let chain = ChainConfig::new(vec![
            SourceConfig::Keyring { account: "alice".to_string() },
            SourceConfig::Literal { secret: "DEFAULTSECRET".to_string() },
        ])
        .build(backend.clone(), Arc::new(NoOpLogger));
        let ctx = Context::background();

        chain.set(&ctx, &Secret::from("NBSWY3DP"), "Example").unwrap();
        assert!(backend.contains(TOTP_SERVICE, "alice"));
        assert_eq!(chain.get(&ctx), Secret::from("NBSWY3DP"));
    }

    #[test]
    fn test_build_chain_shares_logger_across_keyring_sources() {
        use crate::logging::{Field, Logger};
        use parking_lot::Mutex;

        #[derive(Default)]
        struct MissCounter {
            messages: Mutex<Vec<String>>,
        }

        impl Logger for MissCounter {
            fn debug(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
            fn info(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
            fn warn(&self, _ctx: &Context, _message: &str, _fields: &[Field<'_>]) {}
            fn error(&self, _ctx: &Context, message: &str, _fields: &[Field<'_>]) {
                self.messages.lock().push(message.to_string());
            }
        }

        let logger = Arc::new(MissCounter::default());
        let shared: SharedLogger = logger.clone();
        let chain = ChainConfig::new(vec![
            SourceConfig::Keyring { account: "alice".to_string() },
            SourceConfig::Keyring { account: "bob".to_string() },
        ])
        .build(Arc::new(MemoryKeyring::new()), shared);

        assert_eq!(chain.get(&Context::background()), Secret::EMPTY);
        assert_eq!(
            *logger.messages.lock(),
            vec!["could not get totp secret from keyring", "could not get totp secret from keyring"]
        );
    }
}
