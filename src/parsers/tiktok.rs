//! TikTok Pixel (`ttq`) parser.
//!
//! args[0] = method (`track`, `page`, `load`/`init`)
//! args[1] = event name (`PlaceAnOrder`, ...) or pixel code for `load`
//! args[2] = params object

use serde_json::Value;

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("track").to_string();
    let mut params = map_arg(args, 2);

    // `ttq.load('PIXEL_CODE')` carries the installation id instead of an
    // event name; fold it into params like the other positional SDKs.
    let event_name = if method == "load" || method == "init" {
        if let Some(id) = str_arg(args, 1) {
            params.insert("pixel_id".to_string(), Value::String(id.to_string()));
        }
        method.clone()
    } else {
        str_arg(args, 1).unwrap_or("Unknown").to_string()
    };

    PartialPixelEvent {
        platform: Platform::Tiktok,
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
            json!("PlaceAnOrder"),
            json!({"value": 12.5, "currency": "USD", "content_id": "sku-9"}),
        ]);
        assert_eq!(partial.platform, Platform::Tiktok);
        assert_eq!(partial.event_name, "PlaceAnOrder");
        assert_eq!(partial.params.get("content_id"), Some(&json!("sku-9")));
    }

    #[test]
    fn test_load_folds_pixel_code() {
        let partial = parse(&[json!("load"), json!("C0FFEE42")]);
        assert_eq!(partial.method, "load");
        assert_eq!(partial.event_name, "load");
        assert_eq!(partial.params.get("pixel_id"), Some(&json!("C0FFEE42")));
    }

    #[test]
    fn test_empty_args_fall_back() {
        let partial = parse(&[]);
        assert_eq!(partial.method, "track");
        assert_eq!(partial.event_name, "Unknown");
    }
}
