//! Snapchat Pixel (`snaptr`) parser.
//!
//! args[0] = method (`track`, `init`)
//! args[1] = event name (SCREAMING_SNAKE_CASE) or pixel id for `init`
//! args[2] = params object

use serde_json::Value;

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("track").to_string();
    let event_name = str_arg(args, 1).unwrap_or("UNKNOWN").to_string();
    let mut params = map_arg(args, 2);

    if method == "init" {
        if let Some(id) = str_arg(args, 1) {
            params.insert("pixel_id".to_string(), Value::String(id.to_string()));
        }
    }

    PartialPixelEvent {
        platform: Platform::Snapchat,
        method,
        event_name,
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_call() {
        let partial = parse(&[
            json!("track"),
            json!("PURCHASE"),
            json!({"price": 20.0, "currency": "EUR"}),
        ]);
        assert_eq!(partial.platform, Platform::Snapchat);
        assert_eq!(partial.event_name, "PURCHASE");
        assert_eq!(partial.params.get("price"), Some(&json!(20.0)));
    }

    #[test]
    fn test_init_folds_pixel_id() {
        let partial = parse(&[json!("init"), json!("snap-pixel-1")]);
        assert_eq!(partial.params.get("pixel_id"), Some(&json!("snap-pixel-1")));
    }

    #[test]
    fn test_malformed_args_fall_back() {
        let partial = parse(&[json!(null)]);
        assert_eq!(partial.method, "track");
        assert_eq!(partial.event_name, "UNKNOWN");
        assert!(partial.params.is_empty());
    }
}
