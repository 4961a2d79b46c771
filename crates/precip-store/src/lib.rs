//! Filesystem layer: snapshot persistence, discussion scanning, and pruning
//! of deleted discussions.

pub mod gc;
pub mod scan;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use precip_core::Snapshot;
use tracing::{debug, warn};

/// Snapshot file name under the discussions root.
pub const SNAPSHOT_FILE_NAME: &str = ".snapshot.yaml";

/// Path to the snapshot file for a discussions root.
pub fn snapshot_path(discuss_root: &Path) -> PathBuf {
    discuss_root.join(SNAPSHOT_FILE_NAME)
}

/// Load the snapshot for a discussions root.
///
/// Fail-open: a missing or unparsable file yields a default empty snapshot
/// instead of an error — corruption costs one cycle of counters, never a
/// crash. Missing fields inside a parsable file are healed by serde
/// defaults.
pub fn load_snapshot(discuss_root: &Path) -> Snapshot {
    let path = snapshot_path(discuss_root);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!(path = %path.display(), "no snapshot file, starting empty");
            return Snapshot::default();
        }
    };
    match serde_yaml::from_str::<Snapshot>(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(path = %path.display(), %err, "unparsable snapshot, starting empty");
            Snapshot::default()
        }
    }
}

/// Persist the snapshot atomically (temp file + rename) so a concurrent
/// reader never observes a partial write. Last writer wins.
pub fn save_snapshot(discuss_root: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(snapshot)?;
    write_atomic(&snapshot_path(discuss_root), yaml.as_bytes())
}

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
