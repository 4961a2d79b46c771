//! Discussion scanner — walks `<discuss-root>/<date>/<topic>/` and reports
//! the current on-disk truth for each active discussion.
//!
//! Read-only. A single unreadable discussion is skipped with a warning;
//! it never aborts the pass.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use precip_core::{FileEntry, ScannedDiscussion, SnapshotConfig};
use tracing::warn;

/// Candidate discussions-root names under the workspace root, in priority
/// order.
const DISCUSS_ROOT_NAMES: &[&str] = &[".discuss", "discuss", "discussions"];

/// Env override for the scan recency window (hours).
const SCAN_WINDOW_ENV: &str = "PRECIP_SCAN_WINDOW_HOURS";

/// Depth bound for the recency probe below a topic directory.
const MAX_PROBE_DEPTH: usize = 4;

/// Entry budget for the recency probe, to cap cost on pathological trees.
const MAX_PROBE_ENTRIES: usize = 512;

/// First existing discussions root under the workspace root, if any.
pub fn find_discuss_root(workspace_root: &Path) -> Option<PathBuf> {
    DISCUSS_ROOT_NAMES
        .iter()
        .map(|name| workspace_root.join(name))
        .find(|p| p.is_dir())
}

/// Effective recency window from config, with env override. `None` means
/// unbounded — every discussion is scanned.
pub fn scan_window(config: &SnapshotConfig) -> Option<Duration> {
    let hours = std::env::var(SCAN_WINDOW_ENV)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(config.scan_window_hours);
    (hours > 0).then(|| Duration::from_secs(hours * 3600))
}

/// Scan every discussion under the root that was touched within the window,
/// sorted by key.
pub fn scan_all(discuss_root: &Path, window: Option<Duration>) -> Vec<ScannedDiscussion> {
    let cutoff = window.and_then(|w| SystemTime::now().checked_sub(w));
    let mut out = Vec::new();

    let date_dirs = match fs::read_dir(discuss_root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(root = %discuss_root.display(), %err, "cannot read discussions root");
            return out;
        }
    };

    for date_entry in date_dirs.flatten() {
        let date_name = date_entry.file_name().to_string_lossy().into_owned();
        if !is_date_dir_name(&date_name) || !date_entry.path().is_dir() {
            continue;
        }
        let topics = match fs::read_dir(date_entry.path()) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(date = %date_name, %err, "skipping unreadable date directory");
                continue;
            }
        };
        for topic_entry in topics.flatten() {
            let topic_path = topic_entry.path();
            if !topic_path.is_dir() {
                continue;
            }
            if let Some(cutoff) = cutoff {
                if !recently_modified(&topic_path, cutoff) {
                    continue;
                }
            }
            let topic_name = topic_entry.file_name().to_string_lossy().into_owned();
            let key = format!("{date_name}/{topic_name}");
            match scan_discussion(&topic_path, &key) {
                Ok(Some(scanned)) => out.push(scanned),
                Ok(None) => {} // no outline file, not a discussion
                Err(err) => {
                    warn!(%key, %err, "skipping unreadable discussion");
                }
            }
        }
    }

    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

/// Scan one discussion directory. `Ok(None)` when it carries no outline
/// file and therefore does not match the discussion layout.
pub fn scan_discussion(dir: &Path, key: &str) -> anyhow::Result<Option<ScannedDiscussion>> {
    let mut outline_mtime: Option<f64> = None;
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_outline = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy() == "outline");
        if is_outline {
            let mtime = mtime_secs(&path);
            outline_mtime = Some(outline_mtime.map_or(mtime, |prev: f64| prev.max(mtime)));
        }
    }
    let Some(outline_mtime) = outline_mtime else {
        return Ok(None);
    };

    Ok(Some(ScannedDiscussion {
        key: key.to_string(),
        outline_mtime,
        decisions: list_markdown(&dir.join("decisions")),
        notes: list_markdown(&dir.join("notes")),
    }))
}

/// `*.md` files in a directory as (name, mtime) entries, sorted by name.
/// A missing or unreadable directory is an empty list.
fn list_markdown(dir: &Path) -> Vec<FileEntry> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        files.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            mtime: mtime_secs(&path),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

/// Strict `YYYY-MM-DD` shape check.
fn is_date_dir_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Whether the topic directory or anything inside it (bounded probe) was
/// modified after the cutoff.
fn recently_modified(dir: &Path, cutoff: SystemTime) -> bool {
    if modified_after(dir, cutoff) {
        return true;
    }
    let mut budget = MAX_PROBE_ENTRIES;
    any_entry_newer(dir, cutoff, MAX_PROBE_DEPTH, &mut budget)
}

fn any_entry_newer(dir: &Path, cutoff: SystemTime, depth: usize, budget: &mut usize) -> bool {
    if depth == 0 {
        return false;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    for entry in entries.flatten() {
        if *budget == 0 {
            return false;
        }
        *budget -= 1;
        let path = entry.path();
        if modified_after(&path, cutoff) {
            return true;
        }
        if path.is_dir() && any_entry_newer(&path, cutoff, depth - 1, budget) {
            return true;
        }
    }
    false
}

fn modified_after(path: &Path, cutoff: SystemTime) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|mtime| mtime > cutoff)
        .unwrap_or(false)
}

/// Mtime as Unix seconds; 0.0 when unavailable.
fn mtime_secs(path: &Path) -> f64 {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map_or(0.0, |d| d.as_secs_f64())
}
