//! Staleness evaluation — select discussions whose counter crossed the
//! workspace-wide threshold.

use serde::Serialize;

use crate::snapshot::Snapshot;

/// One discussion past the reminder threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleDiscussion {
    pub key: String,
    pub change_count: u32,
}

/// Discussions with `change_count >= stale_threshold`, ordered by key.
///
/// A threshold of 0 disables reminders entirely rather than marking
/// everything stale.
pub fn stale_discussions(snapshot: &Snapshot) -> Vec<StaleDiscussion> {
    let threshold = snapshot.config.stale_threshold;
    if threshold == 0 {
        return Vec::new();
    }
    snapshot
        .discussions
        .iter()
        .filter(|(_, state)| state.outline.change_count >= threshold)
        .map(|(key, state)| StaleDiscussion {
            key: key.clone(),
            change_count: state.outline.change_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DiscussionState, OutlineState};

    fn snapshot_with(threshold: u32, counts: &[(&str, u32)]) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.config.stale_threshold = threshold;
        for (key, count) in counts {
            snapshot.discussions.insert(
                (*key).into(),
                DiscussionState {
                    outline: OutlineState {
                        mtime: 100.0,
                        change_count: *count,
                    },
                    ..Default::default()
                },
            );
        }
        snapshot
    }

    #[test]
    fn reports_at_or_above_threshold() {
        let snapshot = snapshot_with(
            3,
            &[
                ("2026-01-30/under", 2),
                ("2026-01-30/exact", 3),
                ("2026-01-31/over", 5),
            ],
        );
        let stale = stale_discussions(&snapshot);
        assert_eq!(stale.len(), 2);
        assert_eq!(stale[0].key, "2026-01-30/exact");
        assert_eq!(stale[0].change_count, 3);
        assert_eq!(stale[1].key, "2026-01-31/over");
    }

    #[test]
    fn zero_threshold_disables_reporting() {
        let snapshot = snapshot_with(0, &[("2026-01-30/busy", 99)]);
        assert!(stale_discussions(&snapshot).is_empty());
    }

    #[test]
    fn output_is_sorted_by_key() {
        let snapshot = snapshot_with(
            1,
            &[
                ("2026-02-02/b", 1),
                ("2026-01-01/a", 1),
                ("2026-03-03/c", 1),
            ],
        );
        let stale = stale_discussions(&snapshot);
        let keys: Vec<&str> = stale
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(keys, ["2026-01-01/a", "2026-02-02/b", "2026-03-03/c"]);
    }

    #[test]
    fn empty_snapshot_reports_nothing() {
        assert!(stale_discussions(&Snapshot::default()).is_empty());
    }
}
