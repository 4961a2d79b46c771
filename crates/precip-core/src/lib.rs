pub mod compare;
pub mod snapshot;
pub mod stale;

pub use compare::compare_and_update;
pub use snapshot::{
    DiscussionState, FileEntry, OutlineState, ScannedDiscussion, Snapshot, SnapshotConfig,
    DEFAULT_SCAN_WINDOW_HOURS, DEFAULT_STALE_THRESHOLD, SNAPSHOT_VERSION,
};
pub use stale::{stale_discussions, StaleDiscussion};
