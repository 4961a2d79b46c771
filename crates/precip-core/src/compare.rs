//! Change comparison — decides how a discussion's staleness counter moves
//! from one evaluation to the next.

use crate::snapshot::{DiscussionState, FileEntry, OutlineState, ScannedDiscussion};

/// Compute the next persisted state from the prior state and the current
/// scan.
///
/// Rules, in priority order:
/// - decisions or notes changed (added/modified/deleted) → counter resets
///   to 0, even when the outline also moved in the same cycle
/// - outline mtime strictly increased → counter increments
/// - otherwise (equal or decreased mtime) → counter carries over; a
///   decreased mtime (clock skew, file rollback) is never evidence of change
///
/// The stored outline mtime and file lists always become the scanned
/// values, whatever happened to the counter.
pub fn compare_and_update(prior: &DiscussionState, current: &ScannedDiscussion) -> DiscussionState {
    let precipitated = file_sets_differ(&prior.decisions, &current.decisions)
        || file_sets_differ(&prior.notes, &current.notes);

    let change_count = if precipitated {
        0
    } else if current.outline_mtime > prior.outline.mtime {
        prior.outline.change_count + 1
    } else {
        prior.outline.change_count
    };

    DiscussionState {
        outline: OutlineState {
            mtime: current.outline_mtime,
            change_count,
        },
        decisions: current.decisions.clone(),
        notes: current.notes.clone(),
    }
}

/// Order-insensitive set comparison over (name, mtime) pairs.
fn file_sets_differ(a: &[FileEntry], b: &[FileEntry]) -> bool {
    normalized(a) != normalized(b)
}

fn normalized(files: &[FileEntry]) -> Vec<(&str, f64)> {
    let mut pairs: Vec<(&str, f64)> = files.iter().map(|f| (f.name.as_str(), f.mtime)).collect();
    pairs.sort_by(|x, y| x.0.cmp(y.0).then(x.1.total_cmp(&y.1)));
    pairs
}
