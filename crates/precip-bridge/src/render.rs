//! Reminder message rendering.

use precip_core::StaleDiscussion;

/// Human-readable reminder enumerating every stale discussion.
///
/// The message is what the host shows (or feeds back to the agent); the
/// envelope around it is platform-specific and handled elsewhere.
pub fn format_stale_reminder(stale: &[StaleDiscussion]) -> String {
    let mut out = String::from("⚠️ Precipitation Reminder\n\n");
    out.push_str(
        "These discussions have outline progress that has not been \
         precipitated into a decision or note:\n\n",
    );
    for item in stale {
        let times = if item.change_count == 1 {
            "1 time".to_string()
        } else {
            format!("{} times", item.change_count)
        };
        out.push_str(&format!(
            "- {}: outline changed {times} since the last decision/note\n",
            item.key
        ));
    }
    out.push_str(
        "\nRecommendation: document the confirmed outcomes under decisions/ \
         or capture the supporting analysis under notes/ before continuing.",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stale(key: &str, change_count: u32) -> StaleDiscussion {
        StaleDiscussion {
            key: key.into(),
            change_count,
        }
    }

    #[test]
    fn lists_every_stale_discussion_with_count() {
        let msg = format_stale_reminder(&[
            stale("2026-01-30/topic-a", 3),
            stale("2026-01-31/topic-b", 5),
        ]);
        assert!(msg.contains("⚠️ Precipitation Reminder"));
        assert!(msg.contains("2026-01-30/topic-a: outline changed 3 times"));
        assert!(msg.contains("2026-01-31/topic-b: outline changed 5 times"));
        assert!(msg.to_lowercase().contains("recommendation"));
    }

    #[test]
    fn singular_count_reads_naturally() {
        let msg = format_stale_reminder(&[stale("2026-01-30/t", 1)]);
        assert!(msg.contains("outline changed 1 time since"));
    }
}
