//! SIP URI codec
//!
//! ```text
//! scheme:[user[:password]@]host[:port][;param[=value]...][?header[=value][&header[=value]...]]
//! ```
//!
//! Components are taken verbatim; nothing is escaped or unescaped.

mod marshal;
mod types;
mod unmarshal;

pub use marshal::marshal;
pub use types::Uri;
pub use unmarshal::unmarshal;

/// Secure SIP scheme
pub const SIPS_SCHEME: &str = "sips";

/// SIP scheme
pub const SIP_SCHEME: &str = "sip";
