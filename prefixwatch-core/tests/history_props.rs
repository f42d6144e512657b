use chrono::{DateTime, Utc};
use proptest::prelude::*;

use prefixwatch_core::{BoundedHistory, StatsSnapshot, TickStamp};

fn stamp_at(minutes: i64) -> TickStamp {
    TickStamp::from_datetime(
        DateTime::<Utc>::from_timestamp(minutes * 60, 0).expect("timestamp in range"),
    )
}

fn empty_stats(total: u64) -> StatsSnapshot {
    let mut s = StatsSnapshot::zeroed(Vec::new(), Vec::new());
    s.total_paths = total;
    s.other_origins = total;
    s
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(
        max_points in 1usize..30,
        appends in proptest::collection::vec(0i64..500, 0..100),
    ) {
        let mut h = BoundedHistory::new(max_points);
        for (i, minutes) in appends.iter().enumerate() {
            h.append(stamp_at(*minutes), empty_stats(i as u64));
            prop_assert!(h.len() <= max_points);
        }
    }

    #[test]
    fn distinct_stamps_keep_the_most_recent_tail(
        max_points in 1usize..20,
        extra in 1usize..10,
    ) {
        let mut h = BoundedHistory::new(max_points);
        let total = max_points + extra;
        for i in 0..total {
            prop_assert!(h.append(stamp_at(i as i64), empty_stats(i as u64)));
        }
        prop_assert_eq!(h.len(), max_points);
        let totals: Vec<u64> = h.window().map(|p| p.stats.total_paths).collect();
        let expected: Vec<u64> = (extra..total).map(|i| i as u64).collect();
        prop_assert_eq!(totals, expected);
    }

    #[test]
    fn repeated_appends_under_one_stamp_commit_once(
        repeats in 1usize..10,
        minutes in 0i64..500,
    ) {
        let mut h = BoundedHistory::new(15);
        let mut committed = 0;
        for i in 0..repeats {
            if h.append(stamp_at(minutes), empty_stats(i as u64)) {
                committed += 1;
            }
        }
        prop_assert_eq!(committed, 1);
        prop_assert_eq!(h.len(), 1);
        // First committed value survives the retries.
        prop_assert_eq!(h.latest().unwrap().stats.total_paths, 0);
    }
}
