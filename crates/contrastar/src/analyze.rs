//! Contrast analysis entry points.

use contrastar_core::{round_ratio, Color, Conformance, TextSize};

use crate::error::{AnalyzeError, ColorField};
use crate::report::ContrastReport;

/// Configurable contrast analyzer.
///
/// The default configuration checks normal-text thresholds and emits no
/// presentation link. Analysis is pure and stateless; one analyzer can
/// be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContrastAnalyzer {
    text_size: TextSize,
    widget_base_url: Option<String>,
}

impl ContrastAnalyzer {
    /// Create an analyzer with normal-text thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text size whose thresholds are applied.
    #[must_use]
    pub const fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self
    }

    /// Attach a widget base URL; reports then carry a correlated
    /// presentation link of the form `{base}?fg={hex}&bg={hex}`.
    #[must_use]
    pub fn with_widget_base_url(mut self, base: impl Into<String>) -> Self {
        self.widget_base_url = Some(base.into());
        self
    }

    /// Analyze the contrast between two hex color strings.
    ///
    /// Both inputs are parsed first; a malformed color fails the whole
    /// operation with the offending field identified. The reported
    /// ratio is rounded to 2 decimal places and the AA/AAA flags are
    /// derived from that rounded value, so the numbers shown to the
    /// caller always agree with the classification.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::InvalidColor`] when either input is not
    /// a valid 3- or 6-digit hex color.
    pub fn analyze(
        &self,
        foreground: &str,
        background: &str,
    ) -> Result<ContrastReport, AnalyzeError> {
        let fg = parse_field(foreground, ColorField::Foreground)?;
        let bg = parse_field(background, ColorField::Background)?;

        let ratio = round_ratio(fg.contrast_ratio(&bg));
        let conformance = Conformance::classify(ratio, self.text_size);

        let verdict = if conformance.passes_aa {
            "Passes AA."
        } else {
            "Does not pass AA."
        };
        let message =
            format!("The contrast between {foreground} and {background} is {ratio}:1. {verdict}");

        let widget_url = self
            .widget_base_url
            .as_deref()
            .map(|base| widget_link(base, fg, bg));

        Ok(ContrastReport {
            contrast_ratio: ratio,
            passes_aa: conformance.passes_aa,
            passes_aaa: conformance.passes_aaa,
            message,
            widget_url,
        })
    }
}

/// Analyze two hex colors against normal-text thresholds.
///
/// Convenience wrapper over [`ContrastAnalyzer`] for the common case.
///
/// # Errors
///
/// Returns [`AnalyzeError::InvalidColor`] when either input is not a
/// valid 3- or 6-digit hex color.
pub fn analyze_contrast(
    foreground: &str,
    background: &str,
) -> Result<ContrastReport, AnalyzeError> {
    ContrastAnalyzer::new().analyze(foreground, background)
}

fn parse_field(input: &str, field: ColorField) -> Result<Color, AnalyzeError> {
    Color::from_hex(input).map_err(|source| AnalyzeError::InvalidColor { field, source })
}

fn widget_link(base: &str, fg: Color, bg: Color) -> String {
    // Canonical lowercase hex, '#' stripped for query-string use.
    let fg = fg.to_hex();
    let bg = bg.to_hex();
    format!("{base}?fg={}&bg={}", &fg[1..], &bg[1..])
}
