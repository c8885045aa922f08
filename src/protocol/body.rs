//! SIP message body
//!
//! The body is opaque. In memory it is raw bytes; its base64 form only
//! exists at text boundaries (factories, serde).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::Result;

/// SIP message body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    /// No body
    #[default]
    Empty,
    /// Raw body bytes (never empty)
    Bytes(Bytes),
}

impl Body {
    /// Create a body from raw bytes; zero-length input yields [`Body::Empty`]
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        if bytes.is_empty() {
            Self::Empty
        } else {
            Self::Bytes(bytes)
        }
    }

    /// Decode a base64 surrogate; the empty string means no body
    pub fn from_base64(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::Empty);
        }
        let raw = STANDARD.decode(text)?;
        Ok(Self::new(raw))
    }

    /// Encode as a base64 surrogate; [`Body::Empty`] encodes to `""`
    #[must_use]
    pub fn to_base64(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bytes(bytes) => STANDARD.encode(bytes),
        }
    }

    /// Raw body bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Body length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Check if there is no body
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Body {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Body {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_base64(&text).map_err(serde::de::Error::custom)
    }
}
