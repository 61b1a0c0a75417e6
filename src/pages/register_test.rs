use super::*;

#[test]
fn empty_age_is_not_provided() {
    assert_eq!(parse_age(""), Ok(None));
    assert_eq!(parse_age("   "), Ok(None));
}

#[test]
fn numeric_age_parses() {
    assert_eq!(parse_age("29"), Ok(Some(29)));
    assert_eq!(parse_age(" 41 "), Ok(Some(41)));
}

#[test]
fn out_of_range_or_garbage_age_is_rejected() {
    assert!(parse_age("0").is_err());
    assert!(parse_age("121").is_err());
    assert!(parse_age("-3").is_err());
    assert!(parse_age("twenty").is_err());
}

#[test]
fn optional_drops_blank_input() {
    assert_eq!(optional(""), None);
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" O+ "), Some("O+".to_owned()));
}
