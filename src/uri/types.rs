//! SIP URI structure

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// SIP URI components
///
/// Parameters and headers with an empty value are flags (`;lr`, `?subject`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uri {
    /// URI scheme, such as `sip` or `sips`
    pub scheme: String,
    /// User part
    pub user: Option<String>,
    /// Password part, only written when `user` is set
    pub password: Option<String>,
    /// Domain name or IP address
    pub host: String,
    /// Port, `0` if not specified
    pub port: u16,
    /// URI parameters (`transport`, `user`, `ttl`, ...)
    pub parameters: BTreeMap<String, String>,
    /// URI headers (`subject`, `priority`, ...)
    pub headers: BTreeMap<String, String>,
}

impl Uri {
    /// Create a URI with only scheme and host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the user part
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password part
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Add a parameter; an empty value makes it a flag
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add a header; an empty value makes it a flag
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a parameter value (`""` for flags)
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Check if a parameter is present
    #[must_use]
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Get a header value (`""` for flags)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Port if one was given
    #[must_use]
    pub const fn explicit_port(&self) -> Option<u16> {
        if self.port == 0 { None } else { Some(self.port) }
    }

    /// Check if the scheme is `sips`
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.scheme.eq_ignore_ascii_case(super::SIPS_SCHEME)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::marshal::render(self))
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::unmarshal(s)
    }
}
