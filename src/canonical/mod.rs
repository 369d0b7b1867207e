//! Canonical serialization and event fingerprinting.
//!
//! `canonicalize` turns any `serde_json::Value` into a stable string: object
//! keys are written in ascending lexicographic order so two maps with the
//! same entries in different insertion order produce identical output. That
//! stability is load-bearing for fingerprint equality in the dedup engine.
//!
//! Capture sources stringify live page values (including `Date`s, which
//! arrive as ISO-8601 strings) before they reach this boundary. JSON input
//! cannot encode a true reference cycle, so the remaining hazard from
//! hostile or buggy page code is unbounded nesting depth; nodes past the
//! recursion guard serialize to the fixed `"[Circular]"` marker instead of
//! recursing. The function is total: it never fails.

use serde_json::Value;

use crate::model::platform::Platform;

/// Marker emitted in place of nodes past the recursion guard.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Nesting depth past which values degrade to the circular marker.
const MAX_DEPTH: usize = 64;

/// Serialize a value into its canonical string form.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, 0, &mut out);
    out
}

/// Canonical dedup fingerprint for an event's identity-relevant parts.
pub fn fingerprint(platform: Platform, event_name: &str, params: &Value) -> String {
    format!("{}:{}:{}", platform.as_str(), event_name, canonicalize(params))
}

fn write_canonical(value: &Value, depth: usize, out: &mut String) {
    if depth >= MAX_DEPTH {
        write_json_string(CIRCULAR_MARKER, out);
        return;
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_json_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, depth + 1, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_string(key, out);
                out.push(':');
                // Object lookup after sort; the key came from the map.
                if let Some(v) = map.get(key.as_str()) {
                    write_canonical(v, depth + 1, out);
                }
            }
            out.push('}');
        }
    }
}

/// Write a JSON string literal without going through a serializer Result.
fn write_json_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
