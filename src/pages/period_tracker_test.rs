use super::build_period_log;

#[test]
fn builds_log_from_valid_fields() {
    let log = build_period_log("2026-08-01", "28", "5", "medium", "cramps", "tired", "")
        .expect("valid form");
    assert_eq!(log.cycle_start_date, "2026-08-01");
    assert_eq!(log.cycle_length, 28);
    assert_eq!(log.period_length, 5);
    assert_eq!(log.flow_intensity, "medium");
    assert_eq!(log.symptoms, "cramps");
}

#[test]
fn requires_start_date() {
    let err = build_period_log("  ", "28", "5", "medium", "", "", "").unwrap_err();
    assert_eq!(err, "Cycle start date is required");
}

#[test]
fn rejects_non_numeric_cycle_length() {
    let err = build_period_log("2026-08-01", "four", "5", "light", "", "", "").unwrap_err();
    assert!(err.contains("Cycle length"));
}

#[test]
fn rejects_out_of_range_period_length() {
    let err = build_period_log("2026-08-01", "28", "30", "heavy", "", "", "").unwrap_err();
    assert!(err.contains("between 1 and 14"));
}

#[test]
fn trims_free_text_fields() {
    let log = build_period_log("2026-08-01", " 30 ", "6", "light", " bloating ", " calm ", " n ")
        .expect("valid form");
    assert_eq!(log.cycle_length, 30);
    assert_eq!(log.symptoms, "bloating");
    assert_eq!(log.mood, "calm");
    assert_eq!(log.notes, "n");
}
