//! Error taxonomy for contrast analysis.

use contrastar_core::ColorParseError;
use serde::{Deserialize, Serialize};

/// Which color argument an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorField {
    /// The `foreground` argument
    Foreground,
    /// The `background` argument
    Background,
}

impl ColorField {
    /// Field name as it appears in request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        }
    }
}

impl std::fmt::Display for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for analysis operations.
///
/// A malformed color surfaces as an explicit error naming the offending
/// argument; it is never reported as a placeholder ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// A color argument failed hex parsing
    InvalidColor {
        /// Which argument was malformed
        field: ColorField,
        /// The underlying parse failure
        source: ColorParseError,
    },
    /// A required argument was absent (or empty) in the request
    MissingArgument(ColorField),
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor { field, source } => {
                write!(f, "invalid {field} color: {source}")
            }
            Self::MissingArgument(field) => write!(f, "missing required field '{field}'"),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
            Self::MissingArgument(_) => None,
        }
    }
}
