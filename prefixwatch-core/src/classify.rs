//! Pure classification of raw snapshots into categorized path counts.

use prefixwatch_types::{Asn, PrefixConfig, StatsSnapshot};

use crate::fetcher::RawSnapshot;

/// Classify a raw snapshot for one prefix into a `StatsSnapshot`.
///
/// Per usable peer observation:
/// - `total_paths` increments by one;
/// - the origin counter matching `asn_origin` increments, or `other_origins`
///   when the origin is not among `origins_of_interest` (mutually exclusive,
///   exhaustive);
/// - the adjacent upstream — the first path entry left of the (possibly
///   prepended) origin tail — increments its counter when it is a member of
///   the prefix's valid-upstream set. Observations without an identifiable
///   valid upstream stay counted in `total_paths` and origin counters.
///
/// Peer records missing their origin or carrying an unparsable path are
/// skipped entirely: they contribute to no counter, including `total_paths`.
/// An empty snapshot yields an all-zero result; neither case is an error.
#[must_use]
pub fn classify(
    snapshot: &RawSnapshot,
    prefix: &PrefixConfig,
    origins_of_interest: &[Asn],
) -> StatsSnapshot {
    let mut stats = StatsSnapshot::zeroed(
        origins_of_interest.iter().cloned(),
        prefix.valid_upstreams.iter().cloned(),
    );

    for collector in &snapshot.rrcs {
        for peer in &collector.peers {
            let Some(origin) = peer.asn_origin.as_deref().and_then(|s| Asn::parse(s).ok())
            else {
                skipped(prefix, "missing or malformed asn_origin");
                continue;
            };
            let Some(path) = peer.as_path.as_deref().and_then(parse_path) else {
                skipped(prefix, "missing or unparsable as_path");
                continue;
            };

            stats.total_paths += 1;
            match stats.origins.get_mut(&origin) {
                Some(count) => *count += 1,
                None => stats.other_origins += 1,
            }

            if let Some(upstream) = adjacent_upstream(&path, &origin)
                && let Some(count) = stats.upstreams.get_mut(upstream)
            {
                *count += 1;
            }
        }
    }

    stats
}

/// Parse a whitespace-delimited AS path. Returns `None` if any token fails
/// to parse; an empty string is a valid zero-length path.
fn parse_path(raw: &str) -> Option<Vec<Asn>> {
    raw.split_whitespace()
        .map(|tok| Asn::parse(tok).ok())
        .collect()
}

/// Find the AS adjacent to the origin, skipping prepended origin repeats.
///
/// Scans backward from the second-to-last entry past every entry equal to
/// `origin`; the first differing entry is the candidate. Paths of length 0
/// or 1, or paths consisting solely of the origin, have no candidate.
fn adjacent_upstream<'a>(path: &'a [Asn], origin: &Asn) -> Option<&'a Asn> {
    if path.len() < 2 {
        return None;
    }
    path[..path.len() - 1].iter().rev().find(|asn| *asn != origin)
}

#[cfg(feature = "tracing")]
fn skipped(prefix: &PrefixConfig, reason: &'static str) {
    tracing::debug!(prefix = %prefix.prefix, reason, "skipping peer record");
}

#[cfg(not(feature = "tracing"))]
fn skipped(_prefix: &PrefixConfig, _reason: &'static str) {}
