//! SIP message parser (wire bytes to [`Message`])

use std::ops::Range;

use bytes::Bytes;
use tracing::{instrument, trace};

use super::{
    Body, CODE, CRLF, Headers, Kind, METHOD, Message, Metadata, REASON, URI, VERSION,
    VERSION_PREFIX,
};
use crate::{Error, Result};

/// Parse a SIP message from a borrowed buffer
///
/// The body is copied out of `payload`; use [`decode`] to keep it as a
/// slice of an owned buffer instead.
pub fn unmarshal(payload: &[u8]) -> Result<Message> {
    decode(Bytes::copy_from_slice(payload))
}

/// Parse a SIP message
///
/// # Format
///
/// ```text
/// START-LINE CRLF
/// *( Name: value[,value...] CRLF | (SP / HTAB) value CRLF )
/// CRLF
/// [BODY]
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidMessage`] if:
/// - The start line has fewer than three tokens, or a request line has more
/// - A continuation line appears before any header
/// - A header line has no colon or an empty name
/// - The header section is not valid UTF-8
/// - No blank line terminates the header section, or the blank line is the
///   last line of the buffer
#[instrument(level = "trace", skip(payload), fields(len = payload.len()))]
pub fn decode(payload: Bytes) -> Result<Message> {
    let lines = split_lines(&payload);
    let Some((start, rest)) = lines.split_first() else {
        return Err(reject("empty message"));
    };

    let (kind, metadata) = parse_start_line(as_text(&payload[start.clone()])?)?;

    let mut headers = Headers::new();
    let mut current: Option<String> = None;

    for (index, range) in rest.iter().enumerate() {
        let line = &payload[range.clone()];

        if line.is_empty() {
            if is_terminal_blank(index, rest.len()) {
                return Err(reject("blank line is the last line of the message"));
            }
            // A non-terminal line is always followed by CRLF
            let body = payload.slice(range.end + CRLF.len()..);
            trace!(headers = headers.len(), body = body.len(), "parsed SIP message");
            return Ok(Message::from_parts(kind, metadata, headers, Body::new(body)));
        }

        let line = as_text(line)?;

        let (name, value) = if line.starts_with([' ', '\t']) {
            let Some(name) = current.as_deref() else {
                return Err(reject("continuation line before any header"));
            };
            (name, fold_continuation(line))
        } else {
            let (name, value) = split_header(line)?;
            (current.insert(name.to_owned()).as_str(), value)
        };

        headers.extend(name, value.split(','));
    }

    Err(reject("header section is not terminated by a blank line"))
}

fn reject(reason: &'static str) -> Error {
    trace!(reason, "rejecting SIP message");
    Error::invalid_message(reason)
}

fn as_text(line: &[u8]) -> Result<&str> {
    std::str::from_utf8(line).map_err(|_| reject("header section is not valid UTF-8"))
}

/// Split on CRLF, keeping the empty piece after a trailing terminator
fn split_lines(buffer: &[u8]) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index + 1 < buffer.len() {
        if buffer[index] == CRLF[0] && buffer[index + 1] == CRLF[1] {
            lines.push(start..index);
            index += CRLF.len();
            start = index;
        } else {
            index += 1;
        }
    }
    lines.push(start..buffer.len());

    lines
}

fn parse_start_line(line: &str) -> Result<(Kind, Metadata)> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 3 {
        return Err(reject("start line has fewer than three tokens"));
    }

    let mut metadata = Metadata::new();

    if line.starts_with(VERSION_PREFIX) {
        metadata.insert(VERSION, fields[0]);
        metadata.insert(CODE, fields[1]);
        metadata.insert(REASON, fields[2..].join(" "));
        return Ok((Kind::Response, metadata));
    }

    let &[method, uri, version] = fields.as_slice() else {
        return Err(reject("request line must have exactly three tokens"));
    };
    metadata.insert(METHOD, method);
    metadata.insert(URI, uri);
    metadata.insert(VERSION, version);

    Ok((Kind::Request, metadata))
}

/// `Name: value` with both sides trimmed and one trailing comma dropped
fn split_header(line: &str) -> Result<(&str, &str)> {
    let Some((name, value)) = line.split_once(':') else {
        return Err(reject("header line has no colon"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(reject("header name is empty"));
    }

    let value = value.trim();
    let value = value.strip_suffix(',').unwrap_or(value);

    Ok((name, value))
}

/// Value contributed by a folded line
///
/// The trimmed continuation stands on its own: it replaces the value of the
/// line above instead of being joined to it, and no trailing comma is
/// dropped. Its comma-separated pieces are appended to the current header.
fn fold_continuation(line: &str) -> &str {
    line.trim()
}

/// A blank line with nothing after it is rejected, even though it would
/// otherwise close the header section of a body-less message.
///
/// `index` is the position of the blank line among the lines after the start
/// line and `count` is how many such lines there are.
const fn is_terminal_blank(index: usize, count: usize) -> bool {
    index + 1 == count
}
