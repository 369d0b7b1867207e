//! Meta Pixel (`fbq`) parser.
//!
//! args[0] = method (`track`, `init`, `trackCustom`)
//! args[1] = event name (`Purchase`, `PageView`, ...)
//! args[2] = params object

use serde_json::Value;

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("track").to_string();
    let event_name = str_arg(args, 1).unwrap_or("Unknown").to_string();
    let mut params = map_arg(args, 2);

    // For `init` calls, fold the pixel id into params so the validator and
    // platform summary code can treat it uniformly.
    if method == "init" {
        if let Some(id) = str_arg(args, 1) {
            params.insert("pixel_id".to_string(), Value::String(id.to_string()));
        }
    }

    PartialPixelEvent {
        platform: Platform::Meta,
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
            json!("Purchase"),
            json!({"value": 29.99, "currency": "USD"}),
        ]);
        assert_eq!(partial.platform, Platform::Meta);
        assert_eq!(partial.method, "track");
        assert_eq!(partial.event_name, "Purchase");
        assert_eq!(partial.params.get("value"), Some(&json!(29.99)));
    }

    #[test]
    fn test_init_folds_pixel_id() {
        let partial = parse(&[json!("init"), json!("1234567890")]);
        assert_eq!(partial.method, "init");
        assert_eq!(partial.params.get("pixel_id"), Some(&json!("1234567890")));
    }

    #[test]
    fn test_malformed_args_fall_back() {
        let partial = parse(&[json!(42), json!(null), json!([1, 2])]);
        assert_eq!(partial.method, "track");
        assert_eq!(partial.event_name, "Unknown");
        assert!(partial.params.is_empty());
    }
}
