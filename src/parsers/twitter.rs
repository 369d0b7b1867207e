//! Twitter/X Pixel (`twq`) parser.
//!
//! args[0] = method (`init`, `track`, `event`)
//! args[1] = event name or pixel id for `init`
//! args[2] = params object

use serde_json::Value;

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("track").to_string();
    let mut params = map_arg(args, 2);

    let event_name = if method == "init" {
        if let Some(id) = str_arg(args, 1) {
            params.insert("pixel_id".to_string(), Value::String(id.to_string()));
        }
        "init".to_string()
    } else {
        str_arg(args, 1).unwrap_or("Unknown").to_string()
    };

    PartialPixelEvent {
        platform: Platform::Twitter,
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
    fn test_event_call() {
        let partial = parse(&[json!("event"), json!("tw-purchase"), json!({"value": 3})]);
        assert_eq!(partial.platform, Platform::Twitter);
        assert_eq!(partial.event_name, "tw-purchase");
    }

    #[test]
    fn test_init_folds_pixel_id() {
        let partial = parse(&[json!("init"), json!("o1234")]);
        assert_eq!(partial.event_name, "init");
        assert_eq!(partial.params.get("pixel_id"), Some(&json!("o1234")));
    }

    #[test]
    fn test_init_without_id_stays_well_formed() {
        let partial = parse(&[json!("init"), json!(77)]);
        assert_eq!(partial.event_name, "init");
        assert!(partial.params.is_empty());
    }
}
