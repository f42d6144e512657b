use chrono::{TimeZone, Utc};

use prefixwatch_core::{Asn, BoundedHistory, HistoryStore, StatsSnapshot, TickStamp};
use prefixwatch_types::Prefix;

fn stamp(minute: u32) -> TickStamp {
    TickStamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, 0).unwrap())
}

fn stats(total: u64) -> StatsSnapshot {
    let mut s = StatsSnapshot::zeroed(
        [Asn::parse("10236").unwrap()],
        [Asn::parse("3758").unwrap()],
    );
    s.total_paths = total;
    s.other_origins = total;
    s
}

#[test]
fn duplicate_stamp_append_is_a_no_op() {
    let mut h = BoundedHistory::new(15);
    assert!(h.append(stamp(0), stats(3)));
    assert!(!h.append(stamp(0), stats(99)));

    assert_eq!(h.len(), 1);
    let latest = h.latest().unwrap();
    assert_eq!(latest.stamp, stamp(0));
    assert_eq!(latest.stats.total_paths, 3, "contents unchanged by the retry");
}

#[test]
fn overflow_evicts_oldest_first() {
    let max = 15;
    let extra = 4;
    let mut h = BoundedHistory::new(max);
    for minute in 0..(max + extra) as u32 {
        assert!(h.append(stamp(minute), stats(u64::from(minute))));
    }

    assert_eq!(h.len(), max);
    let stamps: Vec<_> = h.window().map(|p| p.stamp).collect();
    let expected: Vec<_> = (extra as u32..(max + extra) as u32).map(stamp).collect();
    assert_eq!(stamps, expected, "most recent max_points, oldest first");
}

#[test]
fn window_is_short_until_capacity_is_reached() {
    let mut h = BoundedHistory::new(15);
    h.append(stamp(0), stats(1));
    h.append(stamp(1), stats(2));
    assert_eq!(h.window().count(), 2);
}

#[test]
fn store_isolates_prefix_histories() {
    let p1 = Prefix::new("171.18.48.0/24");
    let p2 = Prefix::new("171.18.49.0/24");
    let mut store = HistoryStore::new([p1.clone(), p2.clone()], 15);

    assert!(store.append(&p1, stamp(0), stats(5)));
    assert_eq!(store.window(&p1).count(), 1);
    assert_eq!(store.window(&p2).count(), 0);
    assert!(store.latest(&p2).is_none());
}

#[test]
fn store_ignores_unconfigured_prefixes() {
    let p1 = Prefix::new("171.18.48.0/24");
    let mut store = HistoryStore::new([p1], 15);
    let unknown = Prefix::new("10.0.0.0/8");
    assert!(!store.append(&unknown, stamp(0), stats(1)));
    assert_eq!(store.window(&unknown).count(), 0);
}

#[test]
fn aligned_window_keys_on_stamps_not_indexes() {
    let p1 = Prefix::new("171.18.48.0/24");
    let p2 = Prefix::new("171.18.49.0/24");
    let mut store = HistoryStore::new([p1.clone(), p2.clone()], 15);

    // p2 misses the middle tick, as after a partial fetch failure.
    store.append(&p1, stamp(0), stats(1));
    store.append(&p2, stamp(0), stats(10));
    store.append(&p1, stamp(2), stats(2));
    store.append(&p1, stamp(4), stats(3));
    store.append(&p2, stamp(4), stats(30));

    let prefixes = [p1.clone(), p2.clone()];
    let aligned = store.aligned_window(&prefixes);
    assert_eq!(aligned.len(), 3);

    let (s0, at0) = &aligned[0];
    assert_eq!(*s0, stamp(0));
    assert_eq!(at0[&p1].total_paths, 1);
    assert_eq!(at0[&p2].total_paths, 10);

    let (s2, at2) = &aligned[1];
    assert_eq!(*s2, stamp(2));
    assert_eq!(at2[&p1].total_paths, 2);
    assert!(!at2.contains_key(&p2), "gap stays a gap, never index-shifted");

    let (s4, at4) = &aligned[2];
    assert_eq!(*s4, stamp(4));
    assert_eq!(at4[&p2].total_paths, 30);
}
