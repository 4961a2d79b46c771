use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current schema version for new snapshot files.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default number of unprecipitated outline changes before a reminder fires.
pub const DEFAULT_STALE_THRESHOLD: u32 = 3;

/// Default rolling recency window for the scanner, in hours.
pub const DEFAULT_SCAN_WINDOW_HOURS: u64 = 24;

/// One tracked file under `decisions/` or `notes/`: basename + mtime in
/// Unix seconds. The mtime is part of the identity — a rewritten decision
/// counts as a change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub mtime: f64,
}

/// Last-seen outline state plus the staleness counter.
///
/// `change_count` counts consecutive evaluations where the outline moved
/// without a matching decision/note change. It only ever grows by one per
/// evaluation and resets to zero on precipitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlineState {
    pub mtime: f64,
    pub change_count: u32,
}

impl Default for OutlineState {
    fn default() -> Self {
        Self {
            mtime: 0.0,
            change_count: 0,
        }
    }
}

/// Persisted per-discussion state. A brand-new discussion starts zero-valued
/// (outline mtime 0.0, empty file lists) and is rewritten on every
/// evaluation from the current scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscussionState {
    #[serde(default)]
    pub outline: OutlineState,
    #[serde(default)]
    pub decisions: Vec<FileEntry>,
    #[serde(default)]
    pub notes: Vec<FileEntry>,
}

/// Workspace-wide configuration, persisted inside the snapshot file so a
/// project can tune it by editing `.snapshot.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotConfig {
    /// Reminder threshold. `0` disables staleness reporting entirely.
    #[serde(default = "default_stale_threshold")]
    pub stale_threshold: u32,
    /// Scanner recency window in hours. `0` means unbounded (scan everything).
    #[serde(default = "default_scan_window_hours")]
    pub scan_window_hours: u64,
}

fn default_stale_threshold() -> u32 {
    DEFAULT_STALE_THRESHOLD
}

fn default_scan_window_hours() -> u64 {
    DEFAULT_SCAN_WINDOW_HOURS
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            stale_threshold: DEFAULT_STALE_THRESHOLD,
            scan_window_hours: DEFAULT_SCAN_WINDOW_HOURS,
        }
    }
}

/// The single persisted object: one snapshot per workspace.
///
/// Discussions are keyed by their path relative to the discussions root
/// (`<date>/<topic>`, forward slashes). A BTreeMap keeps iteration and
/// serialization order deterministic, which also makes the staleness report
/// ordering stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub config: SnapshotConfig,
    #[serde(default)]
    pub discussions: BTreeMap<String, DiscussionState>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            config: SnapshotConfig::default(),
            discussions: BTreeMap::new(),
        }
    }
}

/// Scanner output for one discussion: the current on-disk truth handed to
/// the comparator. Pure data, no counter — the counter lives in the prior
/// `DiscussionState`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedDiscussion {
    pub key: String,
    pub outline_mtime: f64,
    pub decisions: Vec<FileEntry>,
    pub notes: Vec<FileEntry>,
}
