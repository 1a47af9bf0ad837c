//! Color representation with WCAG luminance and contrast calculations.

use serde::{Deserialize, Serialize};

/// RGB color with 8-bit channels, as decoded from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0, 255]
    pub r: u8,
    /// Green component [0, 255]
    pub g: u8,
    /// Blue component [0, 255]
    pub b: u8,
}

impl Color {
    /// Create a new color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#ff0033", "ff0033" or "#f03").
    ///
    /// Supports 6-digit `RRGGBB` and 3-digit `RGB` shorthand, in which
    /// each nibble is duplicated (`f03` decodes as `ff0033`). The
    /// leading `#` is optional and matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        // Reject non-hex characters up front; decoding below assumes
        // ASCII hex digits only.
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(c));
        }

        let d = hex.as_bytes();
        match d.len() {
            6 => Ok(Self::new(
                pair(d[0], d[1]),
                pair(d[2], d[3]),
                pair(d[4], d[5]),
            )),
            // Shorthand: duplicate each nibble (0xf expands to 0xff).
            3 => Ok(Self::new(
                nibble(d[0]) * 17,
                nibble(d[1]) * 17,
                nibble(d[2]) * 17,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Convert to a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Calculate relative luminance per WCAG 2.x.
    ///
    /// Channels are normalized to [0, 1], gamma-corrected, and combined
    /// with the fixed luminance weights. The result lies in [0, 1].
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let r = Self::linearize(f64::from(self.r) / 255.0);
        let g = Self::linearize(f64::from(self.g) / 255.0);
        let b = Self::linearize(f64::from(self.b) / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Calculate contrast ratio between two colors per WCAG 2.x.
    ///
    /// Returns a value between 1.0 (no contrast) and 21.0 (maximum
    /// contrast). The lighter/darker ordering makes the ratio symmetric
    /// in its arguments.
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();

        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// Gamma-correct a normalized sRGB component for luminance.
    fn linearize(c: f64) -> f64 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        // Unreachable: callers validate digits first.
        _ => 0,
    }
}

const fn pair(hi: u8, lo: u8) -> u8 {
    nibble(hi) * 16 + nibble(lo)
}

/// Error type for color parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Contains a non-hex character
    InvalidHex(char),
    /// Invalid digit count after removing the optional `#`
    InvalidLength(usize),
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(c) => write!(f, "invalid hex character '{c}'"),
            Self::InvalidLength(len) => {
                write!(f, "invalid hex color length {len} (expected 3 or 6 digits)")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
