//! Per-platform required-field rules.
//!
//! `validate` is a pure function over the event's platform, name, and params.
//! Each missing required field appends one error naming the platform, event,
//! and field. Platform/event combinations without a rule always pass.

use serde_json::{Map, Value};

use crate::model::event::{EventStatus, PixelEvent};
use crate::model::platform::Platform;

/// Outcome of validating one event.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub status: EventStatus,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate an event against the rules table.
pub fn validate(event: &PixelEvent) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let params = &event.params;

    match event.platform {
        Platform::Meta => validate_meta(event, params, &mut errors),
        Platform::Ga4 => validate_ga4(event, params, &mut errors),
        Platform::Tiktok => validate_tiktok(event, params, &mut errors),
        Platform::Snapchat => validate_snapchat(event, params, &mut errors),
        Platform::Pinterest => validate_pinterest(event, params, &mut errors),
        // No required-field contracts for the remaining platforms.
        Platform::MsUet | Platform::Twitter | Platform::Linkedin | Platform::Gtm => {}
    }

    let status = normalize_status(&warnings, &errors);
    ValidationResult {
        status,
        warnings,
        errors,
    }
}

fn normalize_status(warnings: &[String], errors: &[String]) -> EventStatus {
    if !errors.is_empty() {
        EventStatus::Error
    } else if !warnings.is_empty() {
        EventStatus::Warning
    } else {
        EventStatus::Ok
    }
}

fn has_string(params: &Map<String, Value>, key: &str) -> bool {
    matches!(params.get(key), Some(Value::String(s)) if !s.is_empty())
}

fn has_number(params: &Map<String, Value>, key: &str) -> bool {
    params
        .get(key)
        .and_then(Value::as_f64)
        .is_some_and(f64::is_finite)
}

fn has_array(params: &Map<String, Value>, key: &str) -> bool {
    matches!(params.get(key), Some(Value::Array(_)))
}

/// 3-letter currency code, case-insensitive.
fn is_three_letter_currency(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s))
        if s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic()))
}

fn validate_meta(event: &PixelEvent, params: &Map<String, Value>, errors: &mut Vec<String>) {
    match event.event_name.as_str() {
        "Purchase" => {
            if !has_number(params, "value") {
                errors.push("Meta Purchase missing required field: value (number).".to_string());
            }
            if !is_three_letter_currency(params.get("currency")) {
                errors.push(
                    "Meta Purchase missing required field: currency (3-letter ISO).".to_string(),
                );
            }
            if !has_array(params, "content_ids") && !has_array(params, "contents") {
                errors.push(
                    "Meta Purchase missing required field: content_ids or contents.".to_string(),
                );
            }
        }
        "AddToCart" => {
            if !has_array(params, "content_ids") && !has_array(params, "contents") {
                errors.push(
                    "Meta AddToCart missing required field: content_ids or contents.".to_string(),
                );
            }
            if !has_string(params, "content_type") {
                errors.push("Meta AddToCart missing required field: content_type.".to_string());
            }
        }
        _ => {}
    }
}

fn validate_ga4(event: &PixelEvent, params: &Map<String, Value>, errors: &mut Vec<String>) {
    if event.event_name.to_lowercase() != "purchase" {
        return;
    }

    if !has_string(params, "transaction_id") {
        errors.push("GA4 purchase missing required field: transaction_id.".to_string());
    }
    if !has_number(params, "value") {
        errors.push("GA4 purchase missing required field: value (number).".to_string());
    }
    if !is_three_letter_currency(params.get("currency")) {
        errors.push("GA4 purchase missing required field: currency (3-letter ISO).".to_string());
    }

    match params.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => {
            for (i, item) in items.iter().enumerate() {
                let ok = item.as_object().is_some_and(|item| {
                    has_string(item, "item_id") || has_string(item, "item_name")
                });
                if !ok {
                    errors.push(format!(
                        "GA4 purchase item[{i}] missing required field: item_id or item_name."
                    ));
                }
            }
        }
        _ => {
            errors.push("GA4 purchase missing required field: items (non-empty array).".to_string());
        }
    }
}

fn validate_tiktok(event: &PixelEvent, params: &Map<String, Value>, errors: &mut Vec<String>) {
    if event.event_name != "PlaceAnOrder" {
        return;
    }
    if !has_number(params, "value") {
        errors.push("TikTok PlaceAnOrder missing required field: value (number).".to_string());
    }
    if !is_three_letter_currency(params.get("currency")) {
        errors.push(
            "TikTok PlaceAnOrder missing required field: currency (3-letter ISO).".to_string(),
        );
    }
    if !has_string(params, "content_id") {
        errors.push("TikTok PlaceAnOrder missing required field: content_id.".to_string());
    }
}

fn validate_snapchat(event: &PixelEvent, params: &Map<String, Value>, errors: &mut Vec<String>) {
    if event.event_name != "PURCHASE" {
        return;
    }
    if !has_number(params, "price") {
        errors.push("Snapchat PURCHASE missing required field: price (number).".to_string());
    }
    if !is_three_letter_currency(params.get("currency")) {
        errors.push(
            "Snapchat PURCHASE missing required field: currency (3-letter ISO).".to_string(),
        );
    }
}

fn validate_pinterest(event: &PixelEvent, params: &Map<String, Value>, errors: &mut Vec<String>) {
    if event.event_name != "checkout" {
        return;
    }
    if !has_number(params, "value") {
        errors.push("Pinterest checkout missing required field: value (number).".to_string());
    }
    if !has_number(params, "order_quantity") {
        errors.push(
            "Pinterest checkout missing required field: order_quantity (number).".to_string(),
        );
    }
    if !is_three_letter_currency(params.get("currency")) {
        errors.push(
            "Pinterest checkout missing required field: currency (3-letter ISO).".to_string(),
        );
    }
}
