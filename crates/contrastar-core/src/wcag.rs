//! WCAG 2.x conformance thresholds, classification and reference info.

use serde::{Deserialize, Serialize};

/// Minimum contrast ratio for AA normal text (WCAG 1.4.3)
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast ratio for AA large text (WCAG 1.4.3)
pub const AA_LARGE_TEXT: f64 = 3.0;
/// Minimum contrast ratio for AAA normal text (WCAG 1.4.6)
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum contrast ratio for AAA large text (WCAG 1.4.6)
pub const AAA_LARGE_TEXT: f64 = 4.5;

/// Text size category for threshold selection.
///
/// Always supplied by the caller; large text (14pt bold or 18pt
/// regular) is never inferred from the colors being checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Normal body text
    #[default]
    Normal,
    /// Large text (14pt bold or 18pt regular)
    Large,
}

impl TextSize {
    /// AA threshold for this text size.
    #[must_use]
    pub const fn aa_threshold(self) -> f64 {
        match self {
            Self::Normal => AA_NORMAL_TEXT,
            Self::Large => AA_LARGE_TEXT,
        }
    }

    /// AAA threshold for this text size.
    #[must_use]
    pub const fn aaa_threshold(self) -> f64 {
        match self {
            Self::Normal => AAA_NORMAL_TEXT,
            Self::Large => AAA_LARGE_TEXT,
        }
    }
}

/// AA/AAA pass flags for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conformance {
    /// Passes WCAG AA
    pub passes_aa: bool,
    /// Passes WCAG AAA
    pub passes_aaa: bool,
}

impl Conformance {
    /// Classify a contrast ratio against the thresholds for `size`.
    ///
    /// Callers are expected to pass the rounded ratio so that the
    /// reported value and its classification always agree.
    #[must_use]
    pub fn classify(ratio: f64, size: TextSize) -> Self {
        Self {
            passes_aa: ratio >= size.aa_threshold(),
            passes_aaa: ratio >= size.aaa_threshold(),
        }
    }
}

/// Round a contrast ratio to 2 decimal places, half away from zero.
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// WCAG conformance level selector for reference info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level AA (minimum recommended)
    AA,
    /// Level AAA (enhanced)
    AAA,
}

impl WcagLevel {
    /// Reference info text for this level. Constant data, no
    /// computation.
    #[must_use]
    pub const fn info(self) -> &'static str {
        match self {
            Self::AA => {
                "WCAG 2.1 Level AA (minimum recommended):\n\
                 - Normal text contrast: 4.5:1\n\
                 - Large text contrast: 3:1\n\
                 - UI component contrast: 3:1\n\
                 - This level is the legal standard in many countries"
            }
            Self::AAA => {
                "WCAG 2.1 Level AAA (enhanced):\n\
                 - Normal text contrast: 7:1\n\
                 - Large text contrast: 4.5:1\n\
                 - UI component contrast: 3:1\n\
                 - This level provides maximum accessibility"
            }
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AA => write!(f, "AA"),
            Self::AAA => write!(f, "AAA"),
        }
    }
}

/// One-line summary of the WCAG contrast thresholds.
pub const WCAG_INFO: &str = "WCAG 2.1: AA requires a minimum contrast of 4.5:1 \
for normal text (3:1 if large). AAA requires 7:1 for normal text.";
