//! Text encoding dispatch at the storage boundary
//!
//! The backend only holds text. A value reaches it by one of three routes,
//! tried in this order: it is already text or bytes, it can marshal itself
//! to text, or it is rejected as an unsupported type. Decoding mirrors this.

use std::any::type_name;

use thiserror::Error;

use crate::types::{BoxError, MarshalText, Secret, UnmarshalText};

/// Errors produced while encoding or decoding stored values
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    #[error("unsupported encode of {type_name}: {source}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("invalid utf-8 text for {type_name}: {source}")]
    InvalidText {
        type_name: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The destination's own unmarshaler failed; its message is kept as is.
    #[error("{0}")]
    Decode(#[source] BoxError),
}

/// How a value is read for writing
pub enum Payload<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Marshaler(&'a dyn MarshalText),
    Unsupported(&'static str),
}

/// Where decoded text is written
pub enum Slot<'a> {
    Text(&'a mut String),
    Bytes(&'a mut Vec<u8>),
    Unmarshaler(&'a mut dyn UnmarshalText),
    Unsupported(&'static str),
}

/// Values that can travel through [`TypedStorage`](super::TypedStorage)
///
/// Both methods default to `Unsupported` with the concrete type name, so an
/// empty `impl StorageValue for T {}` compiles but fails at runtime with
/// `unsupported type: T`.
pub trait StorageValue {
    fn payload(&self) -> Payload<'_> {
        Payload::Unsupported(type_name::<Self>())
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(type_name::<Self>())
    }
}

impl StorageValue for String {
    fn payload(&self) -> Payload<'_> {
        Payload::Text(self)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

impl StorageValue for Vec<u8> {
    fn payload(&self) -> Payload<'_> {
        Payload::Bytes(self)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Bytes(self)
    }
}

impl StorageValue for Secret {
    fn payload(&self) -> Payload<'_> {
        Payload::Marshaler(self)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unmarshaler(self)
    }
}

/// Encode a value into the bytes handed to the backend
pub fn encode<V: StorageValue + ?Sized>(value: &V) -> Result<Vec<u8>, CodecError> {
    match value.payload() {
        Payload::Text(text) => Ok(text.as_bytes().to_vec()),
        Payload::Bytes(bytes) => Ok(bytes.to_vec()),
        Payload::Marshaler(marshaler) => marshaler.marshal_text().map_err(|source| CodecError::Encode {
            type_name: type_name::<V>(),
            source,
        }),
        Payload::Unsupported(name) => Err(CodecError::UnsupportedType(name)),
    }
}

/// Decode backend bytes into `dest`
pub fn decode<V: StorageValue + ?Sized>(data: Vec<u8>, dest: &mut V) -> Result<(), CodecError> {
    match dest.slot() {
        Slot::Text(text) => {
            *text = String::from_utf8(data).map_err(|source| CodecError::InvalidText {
                type_name: type_name::<V>(),
                source,
            })?;
            Ok(())
        }
        Slot::Bytes(bytes) => {
            *bytes = data;
            Ok(())
        }
        Slot::Unmarshaler(unmarshaler) => unmarshaler.unmarshal_text(&data).map_err(CodecError::Decode),
        Slot::Unsupported(name) => Err(CodecError::UnsupportedType(name)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Integer stored as decimal text; negative values refuse to marshal.
    #[derive(Debug, Default, PartialEq)]
    pub(crate) struct Counter(pub i64);

    impl MarshalText for Counter {
        fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
            if self.0 < 0 {
                return Err("negative value".into());
            }
            Ok(self.0.to_string().into_bytes())
        }
    }

    impl UnmarshalText for Counter {
        fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), BoxError> {
            self.0 = std::str::from_utf8(text)?.parse()?;
            Ok(())
        }
    }

    impl StorageValue for Counter {
        fn payload(&self) -> Payload<'_> {
            Payload::Marshaler(self)
        }

        fn slot(&mut self) -> Slot<'_> {
            Slot::Unmarshaler(self)
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct Opaque;

    impl StorageValue for Opaque {}

    #[test]
    fn test_encode_passes_text_and_bytes_through() {
        assert_eq!(encode(&String::from("value")).unwrap(), b"value".to_vec());
        assert_eq!(encode(&b"\x00raw".to_vec()).unwrap(), b"\x00raw".to_vec());
    }

    #[test]
    fn test_encode_uses_marshaler() {
        assert_eq!(encode(&Counter(42)).unwrap(), b"42".to_vec());
        assert_eq!(encode(&Secret::from("NBSWY3DP")).unwrap(), b"NBSWY3DP".to_vec());
    }

    #[test]
    fn test_encode_marshaler_failure_names_type() {
        let err = encode(&Counter(-1)).unwrap_err();
        assert!(matches!(err, CodecError::Encode { .. }));
        let message = err.to_string();
        assert!(message.starts_with("unsupported encode of "));
        assert!(message.contains("Counter"));
        assert!(message.ends_with(": negative value"));
    }

    #[test]
    fn test_encode_unsupported_type() {
        let err = encode(&Opaque).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("unsupported type: "));
        assert!(message.ends_with("Opaque"));
    }

    #[test]
    fn test_decode_direct_assignment() {
        let mut text = String::new();
        decode(b"value".to_vec(), &mut text).unwrap();
        assert_eq!(text, "value");

        let mut bytes = Vec::new();
        decode(b"value".to_vec(), &mut bytes).unwrap();
        assert_eq!(bytes, b"value".to_vec());
    }

    #[test]
    fn test_decode_text_requires_utf8() {
        let mut text = String::from("unchanged");
        let err = decode(vec![0xff], &mut text).unwrap_err();
        assert!(matches!(err, CodecError::InvalidText { type_name, .. } if type_name.ends_with("String")));
        assert!(err.to_string().starts_with("invalid utf-8 text for "));
        assert!(err.to_string().contains("String: "));
        assert_eq!(text, "unchanged");
    }

    #[test]
    fn test_decode_uses_unmarshaler() {
        let mut counter = Counter::default();
        decode(b"42".to_vec(), &mut counter).unwrap();
        assert_eq!(counter, Counter(42));
    }

    #[test]
    fn test_decode_unmarshaler_error_is_verbatim() {
        let mut counter = Counter::default();
        let err = decode(b"value".to_vec(), &mut counter).unwrap_err();
        let expected = "value".parse::<i64>().unwrap_err().to_string();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_decode_unsupported_type() {
        let err = decode(b"value".to_vec(), &mut Opaque).unwrap_err();
        assert!(err.to_string().starts_with("unsupported type: "));
    }
}
