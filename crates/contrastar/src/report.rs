//! Contrast analysis report value object.

use serde::{Deserialize, Serialize};

/// Result of a contrast analysis.
///
/// Created fresh per call; carries no identity beyond its field values.
/// The serialized form uses the wire names `contrastRatio`, `passesAA`,
/// `passesAAA`, `message` and (when present) `widgetUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Contrast ratio, rounded to 2 decimal places, in [1.0, 21.0]
    #[serde(rename = "contrastRatio")]
    pub contrast_ratio: f64,
    /// Passes WCAG AA at the requested text size
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    /// Passes WCAG AAA at the requested text size
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    /// Human-readable summary of the result
    pub message: String,
    /// Correlated presentation link, when an analyzer widget base URL
    /// is configured
    #[serde(rename = "widgetUrl", default, skip_serializing_if = "Option::is_none")]
    pub widget_url: Option<String>,
}

impl ContrastReport {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
