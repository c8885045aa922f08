//! SIP text codec
//!
//! Converts between SIP messages (RFC 3261) and their wire bytes, and
//! between SIP URIs and their string form. Transport, transactions, dialogs
//! and authentication are left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use sipcodec::{Kind, Message};
//!
//! let wire = b"SIP/2.0 200 OK\r\nCall-ID: a84b4c76e66710\r\nCSeq: 1 INVITE\r\n\r\n";
//!
//! // Decode from bytes
//! let msg = Message::decode(wire)?;
//! assert_eq!(msg.kind(), Kind::Response);
//! assert_eq!(msg.headers().first("CSeq"), Some("1 INVITE"));
//!
//! // Encode back (header names in descending order)
//! let bytes = msg.encode()?;
//! assert_eq!(bytes, wire);
//!
//! // URIs
//! let uri: sipcodec::Uri = "sip:alice@atlanta.com;transport=tcp".parse()?;
//! assert_eq!(uri.parameter("transport"), Some("tcp"));
//! # Ok::<(), sipcodec::Error>(())
//! ```
//!
//! # Features
//!
//! - **Zero-copy bodies** - [`decode`] keeps the body as a slice of the input
//! - **Multi-value headers** - comma lists, repeated lines and folded lines
//! - **Base64 body surrogate** - for text-only interchange
//! - **serde** - optional `Serialize`/`Deserialize` for messages and URIs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod error;
pub mod protocol;
pub mod uri;

pub use error::{Error, ErrorKind, Result};
pub use protocol::{
    Body, Headers, Kind, Message, MessageFactory, Metadata, create_request, create_response,
    decode, marshal, unmarshal, validate_headers, validate_metadata,
};
pub use uri::Uri;
