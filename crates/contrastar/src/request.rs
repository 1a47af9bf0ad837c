//! Boundary request shape for collaborator transports.
//!
//! Transports (HTTP handlers, tool-call dispatchers) accept a JSON body
//! with `foreground` and `background` fields. This type mirrors that
//! body and reports absent fields before any parsing happens, keeping
//! the missing-argument concern out of the algorithmic core.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzeError, ColorField};

/// JSON request body for a contrast analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Foreground (text) color, e.g. `#000000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    /// Background color, e.g. `#FFFFFF`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl AnalyzeRequest {
    /// Build a request with both fields set.
    #[must_use]
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: Some(foreground.into()),
            background: Some(background.into()),
        }
    }

    /// Check that both fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::MissingArgument`] naming the first
    /// absent field.
    pub fn validate(&self) -> Result<(&str, &str), AnalyzeError> {
        let foreground = Self::require(self.foreground.as_deref(), ColorField::Foreground)?;
        let background = Self::require(self.background.as_deref(), ColorField::Background)?;
        Ok((foreground, background))
    }

    fn require(value: Option<&str>, field: ColorField) -> Result<&str, AnalyzeError> {
        value
            .filter(|s| !s.is_empty())
            .ok_or(AnalyzeError::MissingArgument(field))
    }
}
