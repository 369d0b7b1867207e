//! Platform parsers.
//!
//! One parser per tracked platform, each a pure function mapping a raw
//! call's positional arguments (or a raw network body string) to a partial
//! event. Parsers never fail: inputs that don't match the expected shape
//! degrade to `"unknown"` placeholders and an empty parameter map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::event::{EventOrigin, ScriptSource};
use crate::model::platform::Platform;

pub mod ga4;
pub mod gtm;
pub mod linkedin;
pub mod meta;
pub mod ms_uet;
pub mod pinterest;
pub mod snapchat;
pub mod tiktok;
pub mod twitter;

/// Raw payload handed over by capture sources (in-page hooks, network
/// observers, dataLayer proxies). All fields optional; the pipeline applies
/// conservative defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCapture {
    pub platform: Option<Platform>,
    /// Positional SDK call arguments, or a single body string for
    /// network-origin hits.
    pub args: Vec<Value>,
    /// Capture-time instant, epoch milliseconds.
    pub timestamp: Option<i64>,
    /// Page URL active at capture time.
    pub url: Option<String>,
    /// Request URL for network-origin hits; used to attribute the platform
    /// via endpoint patterns when `platform` is absent.
    pub request_url: Option<String>,
    pub origin: Option<EventOrigin>,
    /// Raw captured text (e.g. response body); length-capped at ingestion.
    pub raw: Option<String>,
    pub script_source: Option<ScriptSource>,
}

/// Platform/method/name/params produced by a parser; the pipeline fills in
/// the rest of the event envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialPixelEvent {
    pub platform: Platform,
    pub method: String,
    pub event_name: String,
    pub params: Map<String, Value>,
}

impl PartialPixelEvent {
    /// Shape-mismatch fallback: unknown method/event, empty params.
    pub fn unknown(platform: Platform) -> Self {
        Self {
            platform,
            method: "unknown".to_string(),
            event_name: "unknown".to_string(),
            params: Map::new(),
        }
    }
}

/// Dispatch a raw capture's arguments to the platform's parser.
pub fn parse_capture(platform: Platform, args: &[Value]) -> PartialPixelEvent {
    match platform {
        Platform::Meta => meta::parse(args),
        Platform::Tiktok => tiktok::parse(args),
        Platform::Snapchat => snapchat::parse(args),
        Platform::MsUet => ms_uet::parse(args),
        Platform::Twitter => twitter::parse(args),
        Platform::Linkedin => linkedin::parse(args),
        Platform::Pinterest => pinterest::parse(args),
        Platform::Ga4 => ga4::parse(args),
        Platform::Gtm => gtm::parse(args),
    }
}

/// The argument at `index`, as a string, if it is one.
pub(crate) fn str_arg<'a>(args: &'a [Value], index: usize) -> Option<&'a str> {
    args.get(index).and_then(Value::as_str)
}

/// The argument at `index`, cloned as a parameter map when it is an object.
/// Arrays and scalars yield an empty map.
pub(crate) fn map_arg(args: &[Value], index: usize) -> Map<String, Value> {
    args.get(index)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}
