//! Core types for the Contrastar WCAG contrast analyzer.
//!
//! This crate provides the pure, synchronous building blocks used
//! throughout Contrastar:
//! - Color representation: [`Color`] parsed from hex strings
//! - WCAG 2.x math: relative luminance and contrast ratio
//! - Conformance classification: [`Conformance`], [`TextSize`]
//! - Reference data: [`WcagLevel`], [`WCAG_INFO`]
//!
//! Everything here is deterministic and free of I/O; the functions are
//! safe to call concurrently from any number of threads.

mod color;
mod wcag;

pub use color::{Color, ColorParseError};
pub use wcag::{
    round_ratio, Conformance, TextSize, WcagLevel, AAA_LARGE_TEXT, AAA_NORMAL_TEXT, AA_LARGE_TEXT,
    AA_NORMAL_TEXT, WCAG_INFO,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
    }

    proptest! {
        #[test]
        fn prop_luminance_in_unit_range(c in arb_color()) {
            let lum = c.relative_luminance();
            prop_assert!(lum >= 0.0 && lum <= 1.0);
        }

        #[test]
        fn prop_contrast_ratio_symmetric(a in arb_color(), b in arb_color()) {
            prop_assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
        }

        #[test]
        fn prop_contrast_ratio_in_wcag_range(a in arb_color(), b in arb_color()) {
            let ratio = a.contrast_ratio(&b);
            prop_assert!(ratio >= 1.0 && ratio <= 21.0);
        }

        #[test]
        fn prop_contrast_with_self_is_one(c in arb_color()) {
            prop_assert_eq!(c.contrast_ratio(&c), 1.0);
        }

        #[test]
        fn prop_hex_round_trip(c in arb_color()) {
            prop_assert_eq!(Color::from_hex(&c.to_hex()), Ok(c));
        }

        #[test]
        fn prop_shorthand_expands_by_nibble_duplication(
            r in 0u8..16, g in 0u8..16, b in 0u8..16
        ) {
            let short = format!("#{r:x}{g:x}{b:x}");
            let long = format!("#{0:x}{0:x}{1:x}{1:x}{2:x}{2:x}", r, g, b);
            prop_assert_eq!(Color::from_hex(&short), Color::from_hex(&long));
        }

        #[test]
        fn prop_rounded_ratio_has_two_decimals(a in arb_color(), b in arb_color()) {
            let rounded = round_ratio(a.contrast_ratio(&b));
            let cents = rounded * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-9);
        }

        #[test]
        fn prop_classification_monotonic_in_ratio(ratio in 1.0f64..21.0) {
            let normal = Conformance::classify(ratio, TextSize::Normal);
            let large = Conformance::classify(ratio, TextSize::Large);
            // Large-text thresholds are never stricter than normal-text ones.
            prop_assert!(!normal.passes_aa || large.passes_aa);
            prop_assert!(!normal.passes_aaa || large.passes_aaa);
        }
    }

    #[test]
    fn test_black_white_is_max_contrast() {
        let ratio = round_ratio(Color::BLACK.contrast_ratio(&Color::WHITE));
        assert_eq!(ratio, 21.0);
    }

    #[test]
    fn test_color_serde_round_trip() {
        let c = Color::new(30, 41, 59);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
