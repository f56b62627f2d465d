//! Host names handled by the verifier.
//!
//! The verification engine treats a `Host` as opaque. Cleaning raw names
//! pulled from passive sources happens here, before hosts reach the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate hostname, e.g. `api.example.com`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Host(String);

impl Host {
    /// Wrap a host name as-is, without normalization.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this host is the domain itself or one of its subdomains.
    pub fn is_within(&self, domain: &str) -> bool {
        let domain = domain.trim_end_matches('.');
        self.0 == domain
            || self
                .0
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Host {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Clean a raw name from a passive source.
///
/// Lowercases, strips wildcard labels and trailing dots. Returns `None` for
/// names that are empty afterwards or still contain wildcards or whitespace.
pub fn normalize_subdomain(raw: &str) -> Option<Host> {
    let name = raw.trim().to_lowercase();
    let name = name.trim_start_matches("*.").trim_start_matches('.');
    let name = name.trim_end_matches('.');

    if name.is_empty() || name.contains('*') || name.chars().any(char::is_whitespace) {
        return None;
    }

    Some(Host(name.to_string()))
}
