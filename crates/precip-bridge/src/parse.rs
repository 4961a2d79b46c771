//! Hook stdin parsing.
//!
//! Hosts send JSON on stdin; the shape varies by platform and we only care
//! about a handful of fields. Everything here is fail-open: empty or
//! malformed input is `None`, never an error.

use serde_json::Value;

/// Parse the stdin payload. Empty or invalid JSON yields `None`.
pub(crate) fn parse_hook_payload(stdin: &str) -> Option<Value> {
    let trimmed = stdin.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Get a bool field, trying snake_case first then camelCase. Claude Code
/// sends camelCase (e.g. `stopHookActive`); internal tests use snake_case.
pub(crate) fn get_bool(v: &Value, snake_key: &str) -> bool {
    if let Some(b) = v.get(snake_key).and_then(Value::as_bool) {
        return b;
    }
    v.get(snake_to_camel(snake_key))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Whether this invocation is a continuation after the stop hook already
/// fired — Claude Code's infinite-loop guard.
pub(crate) fn stop_hook_active(payload: &Value) -> bool {
    get_bool(payload, "stop_hook_active")
}

pub(crate) fn snake_to_camel(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_garbage_input_are_none() {
        assert!(parse_hook_payload("").is_none());
        assert!(parse_hook_payload("   \n").is_none());
        assert!(parse_hook_payload("not json {").is_none());
    }

    #[test]
    fn valid_json_parses() {
        let payload = parse_hook_payload(r#"{"hook_event_name":"Stop"}"#).unwrap();
        assert_eq!(payload["hook_event_name"], "Stop");
    }

    #[test]
    fn snake_to_camel_converts_correctly() {
        assert_eq!(snake_to_camel("stop_hook_active"), "stopHookActive");
        assert_eq!(snake_to_camel("workspace_roots"), "workspaceRoots");
        assert_eq!(snake_to_camel("cwd"), "cwd");
    }

    #[test]
    fn stop_hook_active_both_casings() {
        assert!(stop_hook_active(&json!({"stop_hook_active": true})));
        assert!(stop_hook_active(&json!({"stopHookActive": true})));
        assert!(!stop_hook_active(&json!({"stop_hook_active": false})));
        assert!(!stop_hook_active(&json!({})));
    }
}
