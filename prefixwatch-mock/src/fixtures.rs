//! Static fixture data mirroring a small real deployment.

use prefixwatch_core::fetcher::{CollectorEntry, PeerRecord};
use prefixwatch_core::{Asn, Prefix, PrefixConfig, RawSnapshot, WatchConfig};

fn asn(s: &str) -> Asn {
    Asn::parse(s).expect("fixture ASN literals are valid")
}

/// A deterministic looking-glass snapshot with two collectors.
///
/// Classified against [`example_config`]'s `/24` prefixes this yields
/// `total_paths = 4` with one path per configured origin, one uninteresting
/// origin, and one prepended announcement through AS3758.
#[must_use]
pub fn looking_glass_fixture() -> RawSnapshot {
    RawSnapshot {
        rrcs: vec![
            CollectorEntry {
                rrc: "RRC00".into(),
                location: "Amsterdam, Netherlands".into(),
                peers: vec![
                    PeerRecord::new("10236", "6939 3758 10236 10236"),
                    PeerRecord::new("19905", "6939 17645 19905"),
                ],
            },
            CollectorEntry {
                rrc: "RRC03".into(),
                location: "Singapore".into(),
                peers: vec![
                    PeerRecord::new("10236", "3758 10236"),
                    PeerRecord::new("64512", "64496 64512"),
                ],
            },
        ],
    }
}

fn prefix(cidr: &str, label: &str, color: &str, upstreams: &[&str]) -> PrefixConfig {
    PrefixConfig {
        prefix: Prefix::new(cidr),
        label: label.to_string(),
        color: color.to_string(),
        valid_upstreams: upstreams.iter().map(|s| asn(s)).collect(),
    }
}

/// The six-prefix configuration the system was originally deployed with.
#[must_use]
pub fn example_config() -> WatchConfig {
    WatchConfig {
        prefixes: vec![
            prefix("171.18.48.0/24", "48.0/24", "royalblue", &["3758"]),
            prefix("171.18.49.0/24", "49.0/24", "forestgreen", &["17645"]),
            prefix("171.18.50.0/24", "50.0/24", "deepskyblue", &["3758"]),
            prefix("171.18.51.0/24", "51.0/24", "lightgreen", &["17645"]),
            prefix("171.18.48.0/23", "48.0/23", "red", &["3758", "17645"]),
            prefix("171.18.50.0/23", "50.0/23", "orange", &["3758", "17645"]),
        ],
        origins_of_interest: vec![asn("10236"), asn("19905")],
        ..WatchConfig::default()
    }
}
