//! Single-shot stop-check orchestration.
//!
//! One invocation = one complete pass: parse stdin, resolve the workspace,
//! scan, compare, evaluate, prune, save, respond. No state survives the
//! process except the snapshot file. Nothing here may propagate a fault to
//! the host session; every failure degrades to a neutral response.

use std::path::Path;

use precip_core::{compare_and_update, stale_discussions, StaleDiscussion};
use precip_store::gc::cleanup_deleted;
use precip_store::scan::{find_discuss_root, scan_all, scan_window};
use precip_store::{load_snapshot, save_snapshot};
use tracing::warn;

use crate::parse::{parse_hook_payload, stop_hook_active};
use crate::platform::{detect_platform, render_allow, render_block, Platform};
use crate::render::format_stale_reminder;
use crate::resolve::resolve_workspace_root;

// ── Hook Result ──

/// Result from a hook dispatch.
///
/// - `stdout`: JSON string to print to stdout (consumed by the host)
/// - `stderr`: warning to print to stderr (shown to the user, exit 1)
#[derive(Debug, Default, Clone)]
pub struct HookResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl HookResult {
    /// Construct a result with stdout only (normal output, exit 0).
    pub fn output(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            stderr: None,
        }
    }
}

// ── Stop check ──

/// Outcome of one evaluation pass over a discussions root.
#[derive(Debug)]
pub struct StopCheck {
    /// Discussions past the threshold, ordered by key.
    pub stale: Vec<StaleDiscussion>,
    /// Snapshot entries pruned for deleted discussions.
    pub pruned: usize,
    /// Set when the updated snapshot could not be persisted. The reminder
    /// is still valid; counters just will not advance until the next
    /// successful save.
    pub save_error: Option<String>,
}

/// Run one full evaluation pass. `None` when the workspace has no
/// discussions root at all, in which case the snapshot file is untouched.
pub fn run_stop_check(workspace_root: &Path) -> Option<StopCheck> {
    let discuss_root = find_discuss_root(workspace_root)?;

    let mut snapshot = load_snapshot(&discuss_root);
    let window = scan_window(&snapshot.config);

    for scanned in scan_all(&discuss_root, window) {
        let prior = snapshot
            .discussions
            .get(&scanned.key)
            .cloned()
            .unwrap_or_default();
        let next = compare_and_update(&prior, &scanned);
        snapshot.discussions.insert(scanned.key.clone(), next);
    }

    // Prune before evaluating so a discussion deleted mid-cycle is never
    // reported. Either way the prune lands before save, which is the
    // contract that makes deletions disappear on the next invocation.
    let pruned = cleanup_deleted(&mut snapshot, &discuss_root);
    let stale = stale_discussions(&snapshot);

    let save_error = save_snapshot(&discuss_root, &snapshot).err().map(|err| {
        warn!(%err, root = %discuss_root.display(), "could not persist snapshot; counters will not advance");
        format!("precip: could not persist snapshot under {}: {err}", discuss_root.display())
    });

    Some(StopCheck {
        stale,
        pruned,
        save_error,
    })
}

/// Main hook entrypoint: parse stdin, run the stop check, wrap the verdict
/// in the host's envelope.
pub fn hook_entrypoint_from_stdin(stdin: &str) -> anyhow::Result<HookResult> {
    let payload = parse_hook_payload(stdin);
    let platform = payload
        .as_ref()
        .map_or(Platform::Unknown, detect_platform);

    // Continuation after our own block response; answering again would loop.
    if payload.as_ref().is_some_and(stop_hook_active) {
        return Ok(HookResult::output(render_allow()));
    }

    let workspace_root = resolve_workspace_root(payload.as_ref());
    let Some(check) = run_stop_check(&workspace_root) else {
        return Ok(HookResult::output(render_allow()));
    };

    let stdout = if check.stale.is_empty() {
        render_allow()
    } else {
        render_block(&format_stale_reminder(&check.stale), platform)
    };

    Ok(HookResult {
        stdout: Some(stdout),
        stderr: check.save_error,
    })
}
