//! Prune snapshot entries whose backing discussion directory is gone.

use std::path::Path;

use precip_core::Snapshot;
use tracing::debug;

/// Remove entries for deleted discussions (and structurally invalid keys,
/// which could otherwise resolve outside the discussions root). Returns the
/// number pruned. Surviving entries are untouched.
pub fn cleanup_deleted(snapshot: &mut Snapshot, discuss_root: &Path) -> usize {
    let before = snapshot.discussions.len();
    snapshot
        .discussions
        .retain(|key, _| key_is_valid(key) && discuss_root.join(key).is_dir());
    let pruned = before - snapshot.discussions.len();
    if pruned > 0 {
        debug!(pruned, "removed deleted discussions from snapshot");
    }
    pruned
}

/// Keys are relative `<date>/<topic>` paths; anything absolute or escaping
/// upward is treated as garbage.
fn key_is_valid(key: &str) -> bool {
    !key.is_empty()
        && !Path::new(key).is_absolute()
        && !key.split(['/', '\\']).any(|part| part == "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use precip_core::DiscussionState;
    use std::fs;

    fn snapshot_with_keys(keys: &[&str]) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for key in keys {
            snapshot
                .discussions
                .insert((*key).into(), DiscussionState::default());
        }
        snapshot
    }

    #[test]
    fn prunes_deleted_keeps_existing() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("2026-01-30/kept")).unwrap();
        let mut snapshot = snapshot_with_keys(&["2026-01-30/kept", "2026-01-30/gone"]);

        let pruned = cleanup_deleted(&mut snapshot, tmp.path());

        assert_eq!(pruned, 1);
        assert!(snapshot.discussions.contains_key("2026-01-30/kept"));
        assert!(!snapshot.discussions.contains_key("2026-01-30/gone"));
    }

    #[test]
    fn prunes_invalid_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let mut snapshot = snapshot_with_keys(&["../outside", "/abs/path", ""]);

        let pruned = cleanup_deleted(&mut snapshot, tmp.path());

        assert_eq!(pruned, 3);
        assert!(snapshot.discussions.is_empty());
    }

    #[test]
    fn survivors_keep_their_counters() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("2026-01-30/kept")).unwrap();
        let mut snapshot = snapshot_with_keys(&["2026-01-30/kept"]);
        snapshot
            .discussions
            .get_mut("2026-01-30/kept")
            .unwrap()
            .outline
            .change_count = 7;

        cleanup_deleted(&mut snapshot, tmp.path());

        assert_eq!(
            snapshot.discussions["2026-01-30/kept"].outline.change_count,
            7
        );
    }

    #[test]
    fn file_where_directory_expected_is_pruned() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("2026-01-30")).unwrap();
        fs::write(tmp.path().join("2026-01-30/flat"), "not a dir").unwrap();
        let mut snapshot = snapshot_with_keys(&["2026-01-30/flat"]);

        assert_eq!(cleanup_deleted(&mut snapshot, tmp.path()), 1);
    }
}
