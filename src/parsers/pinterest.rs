//! Pinterest Tag (`pintrk`) parser.
//!
//! args[0] = method (`track`, `init`, `load`)
//! args[1] = event name (lowercase) or tag id for `init`
//! args[2] = params object

use serde_json::Value;

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("track").to_string();
    let event_name = str_arg(args, 1).unwrap_or(&method).to_string();
    let mut params = map_arg(args, 2);

    if method == "init" {
        if let Some(id) = str_arg(args, 1) {
            params.insert("tag_id".to_string(), Value::String(id.to_string()));
        }
    }

    PartialPixelEvent {
        platform: Platform::Pinterest,
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
    fn test_checkout_call() {
        let partial = parse(&[
            json!("track"),
            json!("checkout"),
            json!({"value": 9.99, "order_quantity": 1, "currency": "USD"}),
        ]);
        assert_eq!(partial.platform, Platform::Pinterest);
        assert_eq!(partial.event_name, "checkout");
        assert_eq!(partial.params.get("order_quantity"), Some(&json!(1)));
    }

    #[test]
    fn test_init_folds_tag_id() {
        let partial = parse(&[json!("init"), json!("2612345")]);
        assert_eq!(partial.params.get("tag_id"), Some(&json!("2612345")));
    }

    #[test]
    fn test_event_name_defaults_to_method() {
        let partial = parse(&[json!("load")]);
        assert_eq!(partial.method, "load");
        assert_eq!(partial.event_name, "load");
    }
}
