use prefixwatch_types::Prefix;
use thiserror::Error;

/// Unified error type for the prefixwatch workspace.
///
/// Prefix-level fetch and decode failures are isolated per prefix per tick;
/// nothing in this taxonomy is process-fatal. Malformed individual peer
/// records never surface here — the classifier recovers them locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    /// A connector failed to retrieve a snapshot for a prefix.
    #[error("fetch failed for {prefix}: {msg}")]
    Fetch {
        /// Prefix whose fetch failed.
        prefix: Prefix,
        /// Human-readable transport/HTTP error message.
        msg: String,
    },

    /// A fetch exceeded the configured per-prefix deadline.
    #[error("fetch timed out for {prefix}")]
    FetchTimeout {
        /// Prefix whose fetch timed out.
        prefix: Prefix,
    },

    /// The retrieved snapshot document could not be decoded.
    ///
    /// This is a whole-document failure; a single bad peer record inside an
    /// otherwise valid document is skipped by the classifier instead.
    #[error("could not decode snapshot for {prefix}: {msg}")]
    Decode {
        /// Prefix whose snapshot was malformed.
        prefix: Prefix,
        /// Description of the decode failure.
        msg: String,
    },

    /// Startup configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The fetcher does not support the requested operation.
    #[error("unsupported capability: {what}")]
    Unsupported {
        /// A capability string describing what was requested.
        what: &'static str,
    },
}

impl WatchError {
    /// Helper: build a `Fetch` error for a prefix with a message.
    pub fn fetch(prefix: &Prefix, msg: impl Into<String>) -> Self {
        Self::Fetch {
            prefix: prefix.clone(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `FetchTimeout` error for a prefix.
    #[must_use]
    pub fn fetch_timeout(prefix: &Prefix) -> Self {
        Self::FetchTimeout {
            prefix: prefix.clone(),
        }
    }

    /// Helper: build a `Decode` error for a prefix with a message.
    pub fn decode(prefix: &Prefix, msg: impl Into<String>) -> Self {
        Self::Decode {
            prefix: prefix.clone(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(what: &'static str) -> Self {
        Self::Unsupported { what }
    }

    /// Helper: build an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
