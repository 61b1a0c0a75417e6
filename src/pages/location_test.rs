use super::{format_fix, live_sample};
use crate::util::geo::GeoPoint;

fn fix() -> GeoPoint {
    GeoPoint {
        latitude: 28.613_93,
        longitude: 77.209_02,
        accuracy: 12.4,
        altitude: Some(216.0),
        heading: None,
        speed: Some(1.2),
    }
}

#[test]
fn live_sample_carries_the_full_fix() {
    let sample = live_sample(fix());
    assert!((sample.latitude - 28.613_93).abs() < f64::EPSILON);
    assert!((sample.longitude - 77.209_02).abs() < f64::EPSILON);
    assert_eq!(sample.altitude, Some(216.0));
    assert_eq!(sample.heading, None);
    assert_eq!(sample.location_source, "gps");
}

#[test]
fn fix_display_rounds_for_reading() {
    assert_eq!(format_fix(fix()), "28.61393, 77.20902 (\u{b1}12 m)");
}
