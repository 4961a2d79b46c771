use std::path::Path;

use precip_core::stale_discussions;
use precip_store::{load_snapshot, scan::find_discuss_root};
use serde_json::json;

/// `precip status` — read-only report of tracked discussions.
pub fn execute(repo_root: &Path, as_json: bool) -> anyhow::Result<()> {
    let Some(discuss_root) = find_discuss_root(repo_root) else {
        if as_json {
            println!("{}", json!({ "discussions": [], "stale": [] }));
        } else {
            println!("No discussion tree found (.discuss/, discuss/, or discussions/).");
        }
        return Ok(());
    };

    let snapshot = load_snapshot(&discuss_root);
    let stale = stale_discussions(&snapshot);

    if as_json {
        let discussions: Vec<_> = snapshot
            .discussions
            .iter()
            .map(|(key, state)| {
                json!({
                    "key": key,
                    "change_count": state.outline.change_count,
                    "decisions": state.decisions.len(),
                    "notes": state.notes.len(),
                })
            })
            .collect();
        println!(
            "{}",
            json!({
                "stale_threshold": snapshot.config.stale_threshold,
                "discussions": discussions,
                "stale": stale,
            })
        );
        return Ok(());
    }

    if snapshot.discussions.is_empty() {
        println!("No discussions tracked yet.");
        return Ok(());
    }

    println!(
        "Tracked discussions (stale threshold: {}):\n",
        snapshot.config.stale_threshold
    );
    for (key, state) in &snapshot.discussions {
        let marker = if stale.iter().any(|s| &s.key == key) {
            "  STALE"
        } else {
            ""
        };
        println!(
            "  {key}  changes={} decisions={} notes={}{marker}",
            state.outline.change_count,
            state.decisions.len(),
            state.notes.len()
        );
    }
    Ok(())
}
