//! Presence validation for factory inputs

use tracing::debug;

use super::{Headers, Metadata};
use crate::{Error, Result};

/// Containers whose keys can be checked for presence
trait KeyLookup {
    fn has_key(&self, key: &str) -> bool;
}

impl KeyLookup for Metadata {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl KeyLookup for Headers {
    fn has_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Returns the first required key the container lacks
fn first_missing<'k, C: KeyLookup + ?Sized>(container: &C, required: &[&'k str]) -> Option<&'k str> {
    required.iter().copied().find(|key| !container.has_key(key))
}

/// Ensure every field in `fields` is present in `metadata`
///
/// Values are not inspected, so an empty value still counts as present.
pub fn validate_metadata(metadata: &Metadata, fields: &[&str]) -> Result<()> {
    match first_missing(metadata, fields) {
        None => Ok(()),
        Some(field) => {
            debug!(field, "missing required metadata field");
            Err(Error::MissingRequiredMetadataField {
                field: field.to_owned(),
            })
        }
    }
}

/// Ensure every header in `fields` is present in `headers`
pub fn validate_headers(headers: &Headers, fields: &[&str]) -> Result<()> {
    match first_missing(headers, fields) {
        None => Ok(()),
        Some(name) => {
            debug!(name, "missing required header");
            Err(Error::MissingRequiredHeader {
                name: name.to_owned(),
            })
        }
    }
}
