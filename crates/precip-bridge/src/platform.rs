//! Host platform detection and response envelopes.
//!
//! The core only supplies the stale-list content; the envelope around it is
//! platform-specific duck typing on the payload shape, never a platform
//! identity field.

use serde_json::{json, Value};

/// Supported host platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    ClaudeCode,
    Cursor,
    Unknown,
}

/// Detect the platform from the payload shape.
pub fn detect_platform(payload: &Value) -> Platform {
    // Claude Code stop/tool hooks carry these fields (either casing)
    for key in ["hook_event_name", "hookEventName", "tool_name", "toolName"] {
        if payload.get(key).is_some() {
            return Platform::ClaudeCode;
        }
    }
    // Cursor afterFileEdit has a top-level file_path and no tool_input
    if payload.get("file_path").is_some() && payload.get("tool_input").is_none() {
        return Platform::Cursor;
    }
    // Cursor stop hook reports a completion status
    if payload
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.contains("completed"))
    {
        return Platform::Cursor;
    }
    Platform::Unknown
}

/// Neutral response: let the host proceed.
pub fn render_allow() -> String {
    "{}".to_string()
}

/// Reminder response in the host's envelope.
pub fn render_block(message: &str, platform: Platform) -> String {
    let envelope = match platform {
        Platform::ClaudeCode => json!({ "decision": "block", "reason": message }),
        Platform::Cursor => json!({ "followup_message": message }),
        Platform::Unknown => json!({ "message": message }),
    };
    envelope.to_string()
}
