//! WCAG color contrast analyzer.
//!
//! Contrastar computes the WCAG 2.x contrast ratio between two hex
//! colors and classifies it against the AA/AAA conformance thresholds:
//!
//! ```
//! let report = contrastar::analyze_contrast("#000000", "#FFFFFF").unwrap();
//! assert_eq!(report.contrast_ratio, 21.0);
//! assert!(report.passes_aa && report.passes_aaa);
//! ```
//!
//! The computation is pure and deterministic: identical inputs always
//! produce identical reports, and swapping foreground and background
//! never changes the ratio. Malformed colors surface as
//! [`AnalyzeError::InvalidColor`] naming the offending argument, never
//! as a placeholder ratio.
//!
//! Transport and presentation (HTTP routing, tool registration, UIs)
//! are collaborator concerns; this crate only provides the analysis and
//! the JSON-ready [`ContrastReport`] / [`AnalyzeRequest`] value
//! objects those collaborators exchange.

mod analyze;
mod error;
mod report;
mod request;

pub use analyze::{analyze_contrast, ContrastAnalyzer};
pub use error::{AnalyzeError, ColorField};
pub use report::ContrastReport;
pub use request::AnalyzeRequest;

// Core building blocks, re-exported for collaborators.
pub use contrastar_core::{
    round_ratio, Color, ColorParseError, Conformance, TextSize, WcagLevel, AAA_LARGE_TEXT,
    AAA_NORMAL_TEXT, AA_LARGE_TEXT, AA_NORMAL_TEXT, WCAG_INFO,
};
