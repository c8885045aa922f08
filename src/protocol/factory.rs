//! Request and response factories

use tracing::{instrument, trace};

use super::{
    Body, Headers, Kind, METHOD, Message, Metadata, REQUEST_HEADERS, REQUEST_METADATA,
    RESPONSE_HEADERS, RESPONSE_METADATA, validate_headers, validate_metadata,
};
use crate::Result;

/// Signature shared by [`create_request`] and [`create_response`]
pub type MessageFactory = fn(Metadata, Headers, &str) -> Result<Message>;

/// Create a SIP request
///
/// `metadata` must contain `method`, `uri` and `version`. The headers `To`,
/// `From`, `Max-Forwards`, `Via` and `Call-ID` are mandatory. RFC 3261 also
/// requires `CSeq`; when it is absent one is generated as `1 <method>`.
///
/// `body` is the base64 surrogate of the body, `""` for none.
///
/// # Errors
///
/// Fails with the first missing metadata field or header, or with
/// [`crate::Error::InvalidBody`] if `body` is not valid base64.
#[instrument(level = "trace", skip_all)]
pub fn create_request(metadata: Metadata, mut headers: Headers, body: &str) -> Result<Message> {
    validate_metadata(&metadata, &REQUEST_METADATA)?;
    validate_headers(&headers, &REQUEST_HEADERS)?;

    if !headers.contains("CSeq") {
        let method = metadata.get(METHOD).unwrap_or_default();
        trace!(method, "generating CSeq");
        headers.append("CSeq", format!("1 {method}"));
    }

    let body = Body::from_base64(body)?;

    Ok(Message::from_parts(Kind::Request, metadata, headers, body))
}

/// Create a SIP response
///
/// `metadata` must contain `version`, `code` and `reason`. The headers
/// `CSeq`, `To`, `From`, `Via` and `Call-ID` are mandatory.
///
/// # Errors
///
/// Fails with the first missing metadata field or header, or with
/// [`crate::Error::InvalidBody`] if `body` is not valid base64.
#[instrument(level = "trace", skip_all)]
pub fn create_response(metadata: Metadata, headers: Headers, body: &str) -> Result<Message> {
    validate_metadata(&metadata, &RESPONSE_METADATA)?;
    validate_headers(&headers, &RESPONSE_HEADERS)?;

    let body = Body::from_base64(body)?;

    Ok(Message::from_parts(Kind::Response, metadata, headers, body))
}
