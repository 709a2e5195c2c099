//! Environment variable secret source

use std::env;

use super::traits::{Deleter, Getter, Provider, SecretError, SecretResult, Setter};
use crate::types::{Context, Secret};

/// Secret source backed by one environment variable
///
/// Reads, writes and deletes act on the live process environment; nothing
/// is cached. A variable that is unset or not valid Unicode reads as
/// [`Secret::EMPTY`].
///
/// # Example
///
/// ```
/// use otpchain_core::{Context, EnvSecret, Getter, Secret};
///
/// let source = EnvSecret::new("OTPCHAIN_DOC_SECRET");
/// assert_eq!(source.get(&Context::background()), Secret::EMPTY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the backing variable
    pub fn var(&self) -> &str {
        &self.var
    }

    // `set_var`/`remove_var` panic on these names.
    fn check_name(&self) -> SecretResult<()> {
        if self.var.is_empty() || self.var.contains('=') || self.var.contains('\0') {
            return Err(SecretError::InvalidEnvVar(self.var.clone()));
        }
        Ok(())
    }
}

impl Getter for EnvSecret {
    fn get(&self, _ctx: &Context) -> Secret {
        if self.check_name().is_err() {
            return Secret::EMPTY;
        }
        env::var(&self.var).map(Secret::from).unwrap_or_default()
    }
}

impl Setter for EnvSecret {
    fn set(&self, _ctx: &Context, secret: &Secret, _issuer: &str) -> SecretResult<()> {
        self.check_name()?;
        if secret.as_str().contains('\0') {
            return Err(SecretError::InvalidEnvValue(self.var.clone()));
        }
        env::set_var(&self.var, secret.as_str());
        Ok(())
    }
}

impl Deleter for EnvSecret {
    fn delete(&self, _ctx: &Context) -> SecretResult<()> {
        self.check_name()?;
        env::remove_var(&self.var);
        Ok(())
    }
}

impl Provider for EnvSecret {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_secret_get_direct() {
        env::set_var("OTPCHAIN_TEST_ENV_GET", "NBSWY3DP");

        let source = EnvSecret::new("OTPCHAIN_TEST_ENV_GET");
        assert_eq!(source.get(&Context::background()), Secret::from("NBSWY3DP"));

        env::remove_var("OTPCHAIN_TEST_ENV_GET");
    }

    #[test]
    fn test_env_secret_get_not_found() {
        let source = EnvSecret::new("OTPCHAIN_TEST_ENV_NONEXISTENT_XYZ");
        assert_eq!(source.get(&Context::background()), Secret::EMPTY);
    }

    #[test]
    fn test_env_secret_empty_value_is_absent() {
        env::set_var("OTPCHAIN_TEST_ENV_EMPTY", "");

        let source = EnvSecret::new("OTPCHAIN_TEST_ENV_EMPTY");
        assert!(source.get(&Context::background()).is_empty());

        env::remove_var("OTPCHAIN_TEST_ENV_EMPTY");
    }

    #[test]
    fn test_env_secret_set_and_delete() {
        let ctx = Context::background();
        let source = EnvSecret::new("OTPCHAIN_TEST_ENV_SET");

        source.set(&ctx, &Secret::from("JBSWY3DPEHPK3PXP"), "issuer").unwrap();
        assert_eq!(env::var("OTPCHAIN_TEST_ENV_SET").unwrap(), "JBSWY3DPEHPK3PXP");
        assert_eq!(source.get(&ctx), Secret::from("JBSWY3DPEHPK3PXP"));

        source.delete(&ctx).unwrap();
        assert!(env::var("OTPCHAIN_TEST_ENV_SET").is_err());
        assert_eq!(source.get(&ctx), Secret::EMPTY);
    }

    #[test]
    fn test_env_secret_rejects_invalid_names() {
        let ctx = Context::background();
        for name in ["", "A=B", "A\0B"] {
            let source = EnvSecret::new(name);
            assert_eq!(source.get(&ctx), Secret::EMPTY);
            assert!(matches!(
                source.set(&ctx, &Secret::from("x"), ""),
                Err(SecretError::InvalidEnvVar(_))
            ));
            assert!(matches!(source.delete(&ctx), Err(SecretError::InvalidEnvVar(_))));
        }
    }

    #[test]
    fn test_env_secret_rejects_nul_in_value() {
        let ctx = Context::background();
        let source = EnvSecret::new("OTPCHAIN_TEST_ENV_NUL_VALUE");

        let err = source.set(&ctx, &Secret::from("NBSW\0Y3DP"), "").unwrap_err();
        assert!(matches!(err, SecretError::InvalidEnvValue(ref name) if name == "OTPCHAIN_TEST_ENV_NUL_VALUE"));
        assert_eq!(
            err.to_string(),
            "invalid value for environment variable \"OTPCHAIN_TEST_ENV_NUL_VALUE\""
        );
        assert!(env::var("OTPCHAIN_TEST_ENV_NUL_VALUE").is_err());
    }
}
