//! Autonomous System Number identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an ASN literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ASN literal: {literal:?}")]
pub struct AsnParseError {
    /// The offending input.
    pub literal: String,
}

/// An Autonomous System Number in canonical decimal string form.
///
/// Routing collectors report ASNs as bare decimal strings (`"3758"`), while
/// operator configuration often carries the `AS` prefix (`"AS3758"`). Both
/// forms parse to the same canonical value, so lookups against configured
/// sets never miss on formatting alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asn(String);

impl Asn {
    /// Parse an ASN literal, accepting an optional leading `AS`/`as`.
    ///
    /// # Errors
    /// Returns `AsnParseError` if the remainder is empty or non-numeric.
    pub fn parse(literal: &str) -> Result<Self, AsnParseError> {
        let trimmed = literal.trim();
        let digits = trimmed
            .strip_prefix("AS")
            .or_else(|| trimmed.strip_prefix("as"))
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AsnParseError {
                literal: literal.to_string(),
            });
        }
        Ok(Self(digits.to_string()))
    }

    /// Returns the canonical decimal form without the `AS` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl FromStr for Asn {
    type Err = AsnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Asn {
    type Error = AsnParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Asn> for String {
    fn from(asn: Asn) -> Self {
        asn.0
    }
}
