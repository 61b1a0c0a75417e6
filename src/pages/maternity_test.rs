use super::{contraction_seconds, parse_severity};

#[test]
fn severity_accepts_the_full_scale() {
    for raw in ["1", "2", "3", "4", "5"] {
        assert!(parse_severity(raw).is_ok(), "severity {raw} should parse");
    }
}

#[test]
fn severity_rejects_out_of_scale_values() {
    assert!(parse_severity("0").is_err());
    assert!(parse_severity("6").is_err());
    assert!(parse_severity("mild").is_err());
}

#[test]
fn contraction_duration_rounds_to_whole_seconds() {
    assert_eq!(contraction_seconds(0.0, 45_400.0), 45);
    assert_eq!(contraction_seconds(1_000.0, 62_600.0), 62);
}

#[test]
fn contraction_duration_never_goes_negative() {
    // Clock skew between readings must not produce a negative duration.
    assert_eq!(contraction_seconds(5_000.0, 4_000.0), 0);
    assert_eq!(contraction_seconds(f64::NAN, 1_000.0), 0);
}
