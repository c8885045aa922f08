//! SIP URI serializer

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::trace;

use super::Uri;
use crate::{Error, Result};

/// Convert a URI to its string form
///
/// Parameters and headers are written in ascending name order. Flags (empty
/// values) are written without `=`.
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] if `uri` is `None`.
pub fn marshal(uri: Option<&Uri>) -> Result<String> {
    let Some(uri) = uri else {
        trace!("refusing to marshal an absent URI");
        return Err(Error::invalid_uri("no URI to marshal"));
    };
    Ok(render(uri))
}

pub(super) fn render(uri: &Uri) -> String {
    let mut out = String::with_capacity(uri.scheme.len() + uri.host.len() + 16);

    out.push_str(&uri.scheme);
    out.push(':');

    if let Some(user) = uri.user.as_deref().filter(|user| !user.is_empty()) {
        out.push_str(user);
        if let Some(password) = uri.password.as_deref().filter(|pw| !pw.is_empty()) {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }

    out.push_str(&uri.host);

    if uri.port != 0 {
        // Writing to a String cannot fail
        let _ = write!(out, ":{}", uri.port);
    }

    for (name, value) in &uri.parameters {
        out.push(';');
        push_pair(&mut out, name, value);
    }

    push_headers(&mut out, &uri.headers);

    out
}

fn push_headers(out: &mut String, headers: &BTreeMap<String, String>) {
    for (index, (name, value)) in headers.iter().enumerate() {
        out.push(if index == 0 { '?' } else { '&' });
        push_pair(out, name, value);
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    if !value.is_empty() {
        out.push('=');
        out.push_str(value);
    }
}
