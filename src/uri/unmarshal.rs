//! SIP URI parser

use std::collections::BTreeMap;

use tracing::{instrument, trace};

use super::Uri;
use crate::{Error, Result};

/// Parse a SIP URI
///
/// The host region (after `@`, or after the scheme when there is no user)
/// is taken apart in this order:
/// 1. Everything after the first `;` is the parameter/header block, split
///    at its first `?` into `;`-separated parameters and `&`-separated
///    headers.
/// 2. A `?` still left in the host starts `&`-separated headers.
/// 3. A `:` still left in the host starts the port.
///
/// A `;` inside a parameter value, or `&`/`=` inside a header value, cannot
/// be escaped and will be misread.
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] if there is no `:` after the scheme or the
/// port is not a `u16`.
#[instrument(level = "trace")]
pub fn unmarshal(payload: &str) -> Result<Uri> {
    let Some((scheme, rest)) = payload.split_once(':') else {
        return Err(reject("missing scheme delimiter"));
    };

    let mut uri = Uri {
        scheme: scheme.to_owned(),
        ..Uri::default()
    };

    let mut host = match rest.split_once('@') {
        None => rest,
        Some((userinfo, host)) => {
            let (user, password) = match userinfo.split_once(':') {
                Some((user, password)) => (user, Some(password)),
                None => (userinfo, None),
            };
            uri.user = Some(user.to_owned()).filter(|user| !user.is_empty());
            uri.password = password.map(str::to_owned);
            host
        }
    };

    if let Some((head, block)) = host.split_once(';') {
        host = head;
        let parameters = match block.split_once('?') {
            Some((parameters, headers)) => {
                parse_pairs(headers, '&', &mut uri.headers);
                parameters
            }
            None => block,
        };
        parse_pairs(parameters, ';', &mut uri.parameters);
    }

    if let Some((head, headers)) = host.split_once('?') {
        host = head;
        parse_pairs(headers, '&', &mut uri.headers);
    }

    if let Some((head, port)) = host.split_once(':') {
        host = head;
        uri.port = port.parse().map_err(|_| reject("port is not a number"))?;
    }

    uri.host = host.to_owned();

    Ok(uri)
}

fn reject(reason: &'static str) -> Error {
    trace!(reason, "rejecting SIP URI");
    Error::invalid_uri(reason)
}

/// Split `text` on `separator` into `name[=value]` entries
fn parse_pairs(text: &str, separator: char, into: &mut BTreeMap<String, String>) {
    for piece in text.split(separator) {
        let (name, value) = piece.split_once('=').unwrap_or((piece, ""));
        into.insert(name.to_owned(), value.to_owned());
    }
}
