//! Tracked advertising/analytics platforms.
//!
//! Closed set of platform tags plus the metadata capture sources and
//! presentation layers need: the owning JS global, display name/color,
//! and collection-endpoint URL patterns for network-origin attribution.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tracked pixel platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Meta,
    Tiktok,
    Snapchat,
    MsUet,
    Twitter,
    Linkedin,
    Pinterest,
    Ga4,
    Gtm,
}

/// All platforms, in a stable order.
pub const ALL_PLATFORMS: [Platform; 9] = [
    Platform::Meta,
    Platform::Tiktok,
    Platform::Snapchat,
    Platform::MsUet,
    Platform::Twitter,
    Platform::Linkedin,
    Platform::Pinterest,
    Platform::Ga4,
    Platform::Gtm,
];

lazy_static! {
    /// Collection-endpoint patterns, used to attribute network-origin hits.
    static ref ENDPOINT_PATTERNS: Vec<(Regex, Platform)> = vec![
        (Regex::new(r"facebook\.com/tr").unwrap(), Platform::Meta),
        (Regex::new(r"analytics\.tiktok\.com").unwrap(), Platform::Tiktok),
        (Regex::new(r"tr\.snapchat\.com").unwrap(), Platform::Snapchat),
        (Regex::new(r"bat\.bing\.com/action").unwrap(), Platform::MsUet),
        (Regex::new(r"t\.co/i/adsct").unwrap(), Platform::Twitter),
        (Regex::new(r"px\.ads\.linkedin\.com").unwrap(), Platform::Linkedin),
        (Regex::new(r"ct\.pinterest\.com").unwrap(), Platform::Pinterest),
        (Regex::new(r"google-analytics\.com/g/collect").unwrap(), Platform::Ga4),
        (Regex::new(r"googletagmanager\.com/gtm\.js").unwrap(), Platform::Gtm),
    ];
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Meta => "meta",
            Platform::Tiktok => "tiktok",
            Platform::Snapchat => "snapchat",
            Platform::MsUet => "ms_uet",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Pinterest => "pinterest",
            Platform::Ga4 => "ga4",
            Platform::Gtm => "gtm",
        }
    }

    /// Human-readable platform name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Meta => "Meta Pixel",
            Platform::Tiktok => "TikTok Pixel",
            Platform::Snapchat => "Snapchat Pixel",
            Platform::MsUet => "Microsoft UET",
            Platform::Twitter => "Twitter/X Pixel",
            Platform::Linkedin => "LinkedIn Insight",
            Platform::Pinterest => "Pinterest Tag",
            Platform::Ga4 => "Google Analytics 4",
            Platform::Gtm => "Google Tag Manager",
        }
    }

    /// Brand color used by presentation layers.
    pub fn brand_color(&self) -> &'static str {
        match self {
            Platform::Meta => "#1877f2",
            Platform::Tiktok => "#ff0050",
            Platform::Snapchat => "#fffc00",
            Platform::MsUet => "#00a4ef",
            Platform::Twitter => "#1da1f2",
            Platform::Linkedin => "#0077b5",
            Platform::Pinterest => "#e60023",
            Platform::Ga4 => "#e37400",
            Platform::Gtm => "#4285f4",
        }
    }

    /// The in-page SDK global owned by this platform, if it has one.
    pub fn js_global(&self) -> Option<&'static str> {
        match self {
            Platform::Meta => Some("fbq"),
            Platform::Tiktok => Some("ttq"),
            Platform::Snapchat => Some("snaptr"),
            Platform::MsUet => Some("uetq"),
            Platform::Twitter => Some("twq"),
            Platform::Linkedin => Some("lintrk"),
            Platform::Pinterest => Some("pintrk"),
            // GA4 and GTM share the dataLayer queue rather than a call global.
            Platform::Ga4 | Platform::Gtm => None,
        }
    }

    /// Map an in-page SDK global back to its platform.
    pub fn from_js_global(global: &str) -> Option<Platform> {
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.js_global() == Some(global))
    }

    /// Attribute a request URL to a platform via endpoint patterns.
    pub fn from_endpoint_url(url: &str) -> Option<Platform> {
        ENDPOINT_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(url))
            .map(|(_, platform)| *platform)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&Platform::MsUet).unwrap(), "\"ms_uet\"");
        let p: Platform = serde_json::from_str("\"ga4\"").unwrap();
        assert_eq!(p, Platform::Ga4);
    }

    #[test]
    fn test_endpoint_attribution() {
        assert_eq!(
            Platform::from_endpoint_url("https://www.facebook.com/tr?id=123"),
            Some(Platform::Meta)
        );
        assert_eq!(
            Platform::from_endpoint_url("https://www.google-analytics.com/g/collect?v=2"),
            Some(Platform::Ga4)
        );
        assert_eq!(Platform::from_endpoint_url("https://example.com/app.js"), None);
    }

    #[test]
    fn test_js_global_round_trip() {
        assert_eq!(Platform::from_js_global("fbq"), Some(Platform::Meta));
        assert_eq!(Platform::from_js_global("ttq"), Some(Platform::Tiktok));
        assert_eq!(Platform::from_js_global("dataLayer"), None);
    }
}
