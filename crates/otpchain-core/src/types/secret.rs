//! The TOTP shared secret and its text codec

use std::fmt;

/// Boxed error returned by text (un)marshalers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Types that can render themselves as text for storage
pub trait MarshalText {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError>;
}

/// Types that can be rebuilt in place from stored text
pub trait UnmarshalText {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), BoxError>;
}

/// A TOTP shared secret
///
/// The value is opaque text (usually base32). [`Secret::EMPTY`] means
/// "no secret configured": every presence check compares against it, so a
/// source that yields an empty string is indistinguishable from a source
/// that has nothing.
///
/// `Debug` output is redacted; `Display` prints the raw value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Secret(String);

impl Secret {
    /// The absent secret
    pub const EMPTY: Secret = Secret(String::new());

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for [`Secret::EMPTY`]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Secret(<empty>)")
        } else {
            f.write_str("Secret(<redacted>)")
        }
    }
}

impl MarshalText for Secret {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.0.as_bytes().to_vec())
    }
}

impl UnmarshalText for Secret {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), BoxError> {
        self.0 = String::from_utf8(text.to_vec())?;
        Ok(())
    }
}
