//! Ad and analytics identifiers exposed to the web client

use std::env;

use schemars::JsonSchema;
use serde::Serialize;

/// Ad slot identifiers per page position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AdSlots {
    /// Slot rendered above the uploader
    pub header: Option<String>,
    /// Slot rendered in the sidebar
    pub sidebar: Option<String>,
    /// Slot rendered between content sections
    pub content: Option<String>,
    /// Slot rendered in the footer
    pub footer: Option<String>,
    /// Slot rendered on small screens
    pub mobile: Option<String>,
}

/// Ad network and conversion tracking configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdsConfig {
    /// Whether the client should render ads at all
    pub enabled: bool,
    /// `AdSense` publisher id
    pub adsense_id: Option<String>,
    /// Google tag id
    pub gtag_id: Option<String>,
    /// Google Ads conversion id
    pub conversion_id: Option<String>,
    /// Slot ids
    pub slots: AdSlots,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

impl AdsConfig {
    /// Reads ad identifiers from the environment
    ///
    /// Ads are only enabled in production, with `ENABLE_ADS=true` and an
    /// `AdSense` id present.
    #[must_use]
    pub fn from_env(production: bool) -> Self {
        let adsense_id = non_empty_var("ADSENSE_ID");
        let flag = non_empty_var("ENABLE_ADS").is_some_and(|val| val == "true");

        Self {
            enabled: production && flag && adsense_id.is_some(),
            adsense_id,
            gtag_id: non_empty_var("GTAG_ID"),
            conversion_id: non_empty_var("CONVERSION_ID"),
            slots: AdSlots {
                header: non_empty_var("ADSENSE_HEADER_SLOT"),
                sidebar: non_empty_var("ADSENSE_SIDEBAR_SLOT"),
                content: non_empty_var("ADSENSE_CONTENT_SLOT"),
                footer: non_empty_var("ADSENSE_FOOTER_SLOT"),
                mobile: non_empty_var("ADSENSE_MOBILE_SLOT"),
            },
        }
    }
}
