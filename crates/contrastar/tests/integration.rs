//! Integration tests for the Contrastar analysis pipeline.

use contrastar::{
    analyze_contrast, AnalyzeError, AnalyzeRequest, ColorField, ContrastAnalyzer, ContrastReport,
    TextSize, WcagLevel, WCAG_INFO,
};

#[test]
fn test_maximum_contrast_pair() {
    let report = analyze_contrast("#000000", "#FFFFFF").unwrap();

    assert_eq!(report.contrast_ratio, 21.0);
    assert!(report.passes_aa);
    assert!(report.passes_aaa);
}

#[test]
fn test_ratio_symmetric_under_argument_swap() {
    let pairs = [
        ("#1e293b", "#ffffff"),
        ("#767676", "#ffffff"),
        ("#ff0000", "#00ff00"),
        ("#0F3", "#333333"),
    ];

    for (fg, bg) in pairs {
        let forward = analyze_contrast(fg, bg).unwrap();
        let backward = analyze_contrast(bg, fg).unwrap();
        assert_eq!(
            forward.contrast_ratio, backward.contrast_ratio,
            "ratio for {fg}/{bg} should not depend on argument order"
        );
        assert_eq!(forward.passes_aa, backward.passes_aa);
        assert_eq!(forward.passes_aaa, backward.passes_aaa);
    }
}

#[test]
fn test_identical_colors_have_minimum_ratio() {
    let report = analyze_contrast("#3366cc", "#3366cc").unwrap();
    assert_eq!(report.contrast_ratio, 1.0);
    assert!(!report.passes_aa);
}

#[test]
fn test_parse_failure_propagates_as_error() {
    // Never a ratio of 0 for malformed input.
    let err = analyze_contrast("notacolor", "#ffffff").unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::InvalidColor {
            field: ColorField::Foreground,
            ..
        }
    ));

    let err = analyze_contrast("#ffffff", "#12").unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::InvalidColor {
            field: ColorField::Background,
            ..
        }
    ));
}

#[test]
fn test_request_to_report_round_trip() {
    // The collaborator flow: JSON body in, validated, analyzed, JSON out.
    let body = r##"{"foreground": "#1e293b", "background": "#ffffff"}"##;
    let request: AnalyzeRequest = serde_json::from_str(body).unwrap();
    let (fg, bg) = request.validate().unwrap();

    let report = analyze_contrast(fg, bg).unwrap();
    let json = report.to_json().unwrap();

    let decoded: ContrastReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
    assert!(json.contains("\"contrastRatio\": 14.63"));
}

#[test]
fn test_missing_body_field_is_a_boundary_error() {
    let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(
        request.validate(),
        Err(AnalyzeError::MissingArgument(ColorField::Foreground))
    );
}

#[test]
fn test_repeated_analysis_is_byte_identical() {
    let analyzer = ContrastAnalyzer::new()
        .with_text_size(TextSize::Normal)
        .with_widget_base_url("https://widget.example");

    let first = analyzer.analyze("#336699", "#ffffff").unwrap();
    let second = analyzer.analyze("#336699", "#ffffff").unwrap();

    assert_eq!(
        first.to_json().unwrap(),
        second.to_json().unwrap(),
        "analysis must be free of randomness"
    );
}

#[test]
fn test_wcag_reference_info_is_static() {
    assert_eq!(WcagLevel::AA.info(), WcagLevel::AA.info());
    assert!(WCAG_INFO.contains("AAA requires 7:1"));
}
