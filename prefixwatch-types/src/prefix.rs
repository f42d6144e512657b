//! Monitored prefix identifiers and their static configuration.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Asn;

/// Typed key identifying a monitored prefix (a CIDR string).
///
/// The CIDR text is treated as an opaque identifier; it is never parsed or
/// aggregated. Ordering and hashing follow the string so prefixes can key
/// the history store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix(String);

impl Prefix {
    /// Construct a prefix key from a CIDR string.
    pub fn new(cidr: impl Into<String>) -> Self {
        Self(cidr.into())
    }

    /// Returns the CIDR text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Static per-prefix configuration loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixConfig {
    /// The monitored CIDR.
    pub prefix: Prefix,
    /// Short display label (e.g. `"48.0/24"`). Carried for renderers, never
    /// interpreted by the core.
    #[serde(default)]
    pub label: String,
    /// Display color name. Carried for renderers, never interpreted.
    #[serde(default)]
    pub color: String,
    /// ASNs accepted as legitimate upstream for this prefix. Fixes the
    /// upstream counter domain for every snapshot classified against it.
    pub valid_upstreams: BTreeSet<Asn>,
}

impl PrefixConfig {
    /// Construct a config with label/color defaults left empty.
    pub fn new<I>(prefix: impl Into<Prefix>, valid_upstreams: I) -> Self
    where
        I: IntoIterator<Item = Asn>,
    {
        Self {
            prefix: prefix.into(),
            label: String::new(),
            color: String::new(),
            valid_upstreams: valid_upstreams.into_iter().collect(),
        }
    }
}

impl From<String> for Prefix {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
