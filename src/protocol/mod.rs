//! SIP message core implementation
//!
//! This module provides the message structure, the wire codec, the presence
//! validator and the request/response factories.

mod body;
mod factory;
mod marshal;
mod message;
mod types;
mod unmarshal;
mod validation;

pub use body::Body;
pub use factory::{MessageFactory, create_request, create_response};
pub use marshal::marshal;
pub use message::Message;
pub use types::{Headers, Kind, Metadata};
pub use unmarshal::{decode, unmarshal};
pub use validation::{validate_headers, validate_metadata};

/// SIP line terminator
pub const CRLF: &[u8] = b"\r\n";

/// Prefix that marks a start line as a status line
pub const VERSION_PREFIX: &str = "SIP/";

/// Protocol version used by RFC 3261 messages
pub const DEFAULT_VERSION: &str = "SIP/2.0";

/// Request method metadata key
pub const METHOD: &str = "method";
/// Request-URI metadata key
pub const URI: &str = "uri";
/// Protocol version metadata key
pub const VERSION: &str = "version";
/// Status code metadata key
pub const CODE: &str = "code";
/// Reason phrase metadata key
pub const REASON: &str = "reason";

/// Metadata every request factory input must carry
pub const REQUEST_METADATA: [&str; 3] = [METHOD, URI, VERSION];

/// Headers every request factory input must carry (`CSeq` is generated if absent)
pub const REQUEST_HEADERS: [&str; 5] = ["To", "From", "Max-Forwards", "Via", "Call-ID"];

/// Metadata every response factory input must carry
pub const RESPONSE_METADATA: [&str; 3] = [VERSION, CODE, REASON];

/// Headers every response factory input must carry
pub const RESPONSE_HEADERS: [&str; 5] = ["CSeq", "To", "From", "Via", "Call-ID"];
