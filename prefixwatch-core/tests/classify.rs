use prefixwatch_core::fetcher::{CollectorEntry, PeerRecord, RawSnapshot};
use prefixwatch_core::{classify, Asn, PrefixConfig};

fn asn(s: &str) -> Asn {
    Asn::parse(s).unwrap()
}

fn origins() -> Vec<Asn> {
    vec![asn("10236"), asn("19905")]
}

fn snapshot(peers: Vec<PeerRecord>) -> RawSnapshot {
    RawSnapshot {
        rrcs: vec![CollectorEntry {
            rrc: "RRC00".into(),
            location: "Amsterdam".into(),
            peers,
        }],
    }
}

#[test]
fn classifies_origins_and_valid_upstream() {
    // End-to-end fixture: one peer announcing via the valid upstream with a
    // prepended origin, one peer from an uninteresting origin.
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    let snap = snapshot(vec![
        PeerRecord::new("10236", "3758 10236 10236"),
        PeerRecord::new("77777", "9999 77777"),
    ]);

    let stats = classify(&snap, &prefix, &origins());
    assert_eq!(stats.total_paths, 2);
    assert_eq!(stats.origins[&asn("10236")], 1);
    assert_eq!(stats.origins[&asn("19905")], 0);
    assert_eq!(stats.other_origins, 1);
    assert_eq!(stats.upstreams[&asn("3758")], 1);
}

#[test]
fn invalid_upstream_is_excluded_from_upstream_accounting_only() {
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    let snap = snapshot(vec![PeerRecord::new("10236", "9999 10236")]);

    let stats = classify(&snap, &prefix, &origins());
    assert_eq!(stats.total_paths, 1);
    assert_eq!(stats.origins[&asn("10236")], 1);
    assert_eq!(stats.upstream_sum(), 0);
}

#[test]
fn fully_prepended_paths_never_count_an_upstream() {
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    for path in ["10236", "10236 10236", "10236 10236 10236 10236"] {
        let stats = classify(
            &snapshot(vec![PeerRecord::new("10236", path)]),
            &prefix,
            &origins(),
        );
        assert_eq!(stats.total_paths, 1, "path {path:?}");
        assert_eq!(stats.upstream_sum(), 0, "path {path:?}");
    }
}

#[test]
fn empty_snapshot_is_a_valid_zero_result() {
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    let stats = classify(&RawSnapshot::default(), &prefix, &origins());
    assert_eq!(stats.total_paths, 0);
    assert_eq!(stats.origin_sum(), 0);
    assert_eq!(stats.upstream_sum(), 0);
    // Counter domains are still fully populated.
    assert_eq!(stats.origins.len(), 2);
    assert_eq!(stats.upstreams.len(), 1);
}

#[test]
fn malformed_records_are_skipped_without_aborting_the_snapshot() {
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    let snap = snapshot(vec![
        PeerRecord {
            asn_origin: None,
            as_path: Some("3758 10236".into()),
        },
        PeerRecord {
            asn_origin: Some("10236".into()),
            as_path: None,
        },
        PeerRecord::new("10236", "3758 not-an-asn 10236"),
        PeerRecord::new("10236", "3758 10236"),
    ]);

    let stats = classify(&snap, &prefix, &origins());
    // Only the last record is usable.
    assert_eq!(stats.total_paths, 1);
    assert_eq!(stats.origins[&asn("10236")], 1);
    assert_eq!(stats.upstreams[&asn("3758")], 1);
}

#[test]
fn empty_path_string_counts_but_yields_no_upstream() {
    let prefix = PrefixConfig::new("171.18.48.0/24", [asn("3758")]);
    let snap = snapshot(vec![PeerRecord::new("10236", "")]);

    let stats = classify(&snap, &prefix, &origins());
    assert_eq!(stats.total_paths, 1);
    assert_eq!(stats.upstream_sum(), 0);
}

#[test]
fn counts_accumulate_across_collectors() {
    let prefix = PrefixConfig::new("171.18.48.0/23", [asn("3758"), asn("17645")]);
    let snap = RawSnapshot {
        rrcs: vec![
            CollectorEntry {
                peers: vec![PeerRecord::new("10236", "3758 10236")],
                ..Default::default()
            },
            CollectorEntry {
                peers: vec![
                    PeerRecord::new("19905", "17645 19905 19905"),
                    PeerRecord::new("19905", "6939 17645 19905"),
                ],
                ..Default::default()
            },
        ],
    };

    let stats = classify(&snap, &prefix, &origins());
    assert_eq!(stats.total_paths, 3);
    assert_eq!(stats.origins[&asn("10236")], 1);
    assert_eq!(stats.origins[&asn("19905")], 2);
    assert_eq!(stats.other_origins, 0);
    assert_eq!(stats.upstreams[&asn("3758")], 1);
    assert_eq!(stats.upstreams[&asn("17645")], 2);
}
