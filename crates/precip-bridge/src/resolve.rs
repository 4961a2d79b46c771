//! Workspace root resolution.
//!
//! Pure function of (payload, environment): always produces an absolute
//! path, never fails. Host platforms disagree on where they put the
//! workspace roots, so candidates are a prioritized lookup table instead of
//! per-platform branches.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Known payload fields carrying a workspace-roots array, in priority
/// order. Entries may be plain strings or objects with a `path` field.
const ROOT_FIELDS: &[&str] = &[
    "workspace_roots",
    "workspaceRoots",
    "workspace_folders",
    "workspaceFolders",
];

/// Project-directory env vars, platform-specific first, then generic.
const PROJECT_DIR_VARS: &[&str] = &[
    "CLAUDE_PROJECT_DIR",
    "CURSOR_PROJECT_DIR",
    "WORKSPACE_ROOT",
    "PROJECT_ROOT",
];

/// Resolve the workspace root for this invocation from the payload and the
/// process environment.
pub fn resolve_workspace_root(payload: Option<&Value>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_with(payload, |key| std::env::var(key).ok(), &cwd)
}

/// Resolution with an injected env lookup, for determinism under test.
pub(crate) fn resolve_with(
    payload: Option<&Value>,
    env: impl Fn(&str) -> Option<String>,
    cwd: &Path,
) -> PathBuf {
    if let Some(root) = payload.and_then(payload_root) {
        return absolutize(&root, cwd);
    }
    for var in PROJECT_DIR_VARS {
        if let Some(value) = env(var).filter(|v| !v.is_empty()) {
            return absolutize(&value, cwd);
        }
    }
    if let Some(pwd) = env("PWD").filter(|v| !v.is_empty()) {
        return absolutize(&pwd, cwd);
    }
    cwd.to_path_buf()
}

/// First listed root of the first present roots field.
fn payload_root(payload: &Value) -> Option<String> {
    for field in ROOT_FIELDS {
        let Some(roots) = payload.get(field).and_then(Value::as_array) else {
            continue;
        };
        let first = roots.first()?;
        let path = first
            .as_str()
            .or_else(|| first.get("path").and_then(Value::as_str))?;
        if !path.is_empty() {
            return Some(path.to_string());
        }
    }
    None
}

fn absolutize(path: &str, cwd: &Path) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    }
}
