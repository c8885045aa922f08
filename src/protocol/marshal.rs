//! SIP message serializer ([`Message`] to wire bytes)

use tracing::{debug, instrument};

use super::{CRLF, Message};
use crate::{Error, Result};

/// Encode a message to wire bytes
///
/// # Format
///
/// ```text
/// A SP B SP C CRLF                 (method uri version | version code reason)
/// Name: value CRLF                 (one line per value, names descending)
/// CRLF
/// [BODY]
/// ```
///
/// Header names are emitted in descending lexicographic order; the values
/// of one name keep their stored order.
///
/// # Errors
///
/// Returns [`Error::MessageGenerationFailure`] if a start-line field for the
/// message kind is absent, a header name is empty, or a header has no
/// values. Nothing is returned on failure.
#[instrument(level = "trace", skip(message), fields(kind = %message.kind()))]
pub fn marshal(message: &Message) -> Result<Vec<u8>> {
    let metadata = message.metadata();
    let headers = message.headers();
    let body = message.body().as_bytes();

    let mut start_line = Vec::with_capacity(3);
    for field in message.kind().start_line_fields() {
        let Some(value) = metadata.get(field) else {
            debug!(field, "start-line field missing");
            return Err(Error::generation(format!("missing start-line field {field:?}")));
        };
        start_line.push(value);
    }

    let mut buffer = Vec::with_capacity(estimate_size(message));
    buffer.extend_from_slice(start_line.join(" ").as_bytes());
    buffer.extend_from_slice(CRLF);

    for (name, values) in headers.iter().rev() {
        if name.is_empty() {
            debug!("empty header name");
            return Err(Error::generation("empty header name"));
        }
        if values.is_empty() {
            debug!(name = %name, "header without values");
            return Err(Error::generation(format!("header {name:?} has no values")));
        }

        for value in values {
            buffer.extend_from_slice(name.as_bytes());
            buffer.extend_from_slice(b": ");
            buffer.extend_from_slice(value.as_bytes());
            buffer.extend_from_slice(CRLF);
        }
    }

    buffer.extend_from_slice(CRLF);
    buffer.extend_from_slice(body);

    Ok(buffer)
}

fn estimate_size(message: &Message) -> usize {
    let metadata: usize = message.metadata().iter().map(|(_, v)| v.len() + 1).sum();
    let headers: usize = message
        .headers()
        .iter()
        .map(|(name, values)| {
            values
                .iter()
                .map(|value| name.len() + value.len() + 4)
                .sum::<usize>()
        })
        .sum();

    metadata + headers + message.body().len() + 2 * CRLF.len()
}
