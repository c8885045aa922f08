//! SIP message implementation

use super::{Body, CODE, Headers, Kind, METHOD, Metadata};

/// SIP message
///
/// Built by the factories ([`super::create_request`],
/// [`super::create_response`]) or by the parser ([`super::unmarshal`]).
/// The parser only enforces wire-level structure, so a parsed message may
/// lack headers a factory would have required.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Request or response
    kind: Kind,
    /// Start-line fields
    metadata: Metadata,
    /// Header values by name
    headers: Headers,
    /// Opaque body
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Body::is_empty")
    )]
    body: Body,
}

impl Message {
    /// Assemble a message from parts without validation
    #[must_use]
    pub const fn from_parts(kind: Kind, metadata: Metadata, headers: Headers, body: Body) -> Self {
        Self {
            kind,
            metadata,
            headers,
            body,
        }
    }

    /// Split into parts
    #[must_use]
    pub fn into_parts(self) -> (Kind, Metadata, Headers, Body) {
        (self.kind, self.metadata, self.headers, self.body)
    }

    /// Get message kind
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Check if this is a request
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(self.kind, Kind::Request)
    }

    /// Check if this is a response
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(self.kind, Kind::Response)
    }

    /// Get metadata
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get mutable metadata
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Get headers
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get mutable headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Get body
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Set body
    pub fn set_body(&mut self, body: impl Into<Body>) {
        self.body = body.into();
    }

    /// Body as its base64 surrogate (`""` when there is none)
    #[must_use]
    pub fn body_base64(&self) -> String {
        self.body.to_base64()
    }

    /// Request method, if this is a request that carries one
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match self.kind {
            Kind::Request => self.metadata.get(METHOD),
            Kind::Response => None,
        }
    }

    /// Numeric status code, if this is a response with a parseable code
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            Kind::Request => None,
            Kind::Response => self.metadata.get(CODE)?.parse().ok(),
        }
    }

    /// Encode message to wire bytes
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        super::marshal(self)
    }

    /// Decode message from wire bytes
    pub fn decode(bytes: &[u8]) -> crate::Result<Self> {
        super::unmarshal(bytes)
    }
}
