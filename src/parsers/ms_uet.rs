//! Microsoft UET (`uetq`) parser.
//!
//! args[0] = method (`pageLoad`, `event`, `set`)
//! For `event`: args[1] = event category,
//!              args[2] = { event_label, event_value, revenue_value, currency }

use serde_json::{Map, Value};

use super::{map_arg, str_arg, PartialPixelEvent};
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let method = str_arg(args, 0).unwrap_or("pageLoad").to_string();
    let mut event_name = "PageLoad".to_string();
    let mut params = Map::new();

    if method == "event" {
        if let Some(name) = str_arg(args, 1) {
            event_name = name.to_string();
        }
        params = map_arg(args, 2);
    }

    PartialPixelEvent {
        platform: Platform::MsUet,
        method,
        event_name,
        params,
    }
}
