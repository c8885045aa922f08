//! Codec error types

use thiserror::Error;

/// SIP codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed start line, bad continuation, or broken header section
    #[error("invalid SIP message: {reason}")]
    InvalidMessage {
        /// What the parser rejected
        reason: &'static str,
    },

    /// Body surrogate is not valid base64
    #[error("invalid body on SIP message: {0}")]
    InvalidBody(#[from] base64::DecodeError),

    /// A required metadata field is absent
    #[error("missing required metadata field of SIP message: {field}")]
    MissingRequiredMetadataField {
        /// Missing field name
        field: String,
    },

    /// A required header is absent
    #[error("missing required header on SIP message: {name}")]
    MissingRequiredHeader {
        /// Missing header name
        name: String,
    },

    /// Structure cannot be rendered as a wire message
    #[error("failed to generate a SIP message: {reason}")]
    MessageGenerationFailure {
        /// What made generation impossible
        reason: String,
    },

    /// Invalid SIP URI
    #[error("invalid SIP URI: {reason}")]
    InvalidUri {
        /// What the URI parser rejected
        reason: &'static str,
    },
}

/// Error categories, for callers that branch on the kind of failure only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidMessage`]
    InvalidMessage,
    /// See [`Error::InvalidBody`]
    InvalidBody,
    /// See [`Error::MissingRequiredMetadataField`]
    MissingRequiredMetadataField,
    /// See [`Error::MissingRequiredHeader`]
    MissingRequiredHeader,
    /// See [`Error::MessageGenerationFailure`]
    MessageGenerationFailure,
    /// See [`Error::InvalidUri`]
    InvalidUri,
}

impl Error {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMessage { .. } => ErrorKind::InvalidMessage,
            Self::InvalidBody(_) => ErrorKind::InvalidBody,
            Self::MissingRequiredMetadataField { .. } => ErrorKind::MissingRequiredMetadataField,
            Self::MissingRequiredHeader { .. } => ErrorKind::MissingRequiredHeader,
            Self::MessageGenerationFailure { .. } => ErrorKind::MessageGenerationFailure,
            Self::InvalidUri { .. } => ErrorKind::InvalidUri,
        }
    }

    pub(crate) const fn invalid_message(reason: &'static str) -> Self {
        Self::InvalidMessage { reason }
    }

    pub(crate) const fn invalid_uri(reason: &'static str) -> Self {
        Self::InvalidUri { reason }
    }

    pub(crate) fn generation(reason: impl Into<String>) -> Self {
        Self::MessageGenerationFailure {
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
