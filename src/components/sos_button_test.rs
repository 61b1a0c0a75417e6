use super::*;

fn fix() -> GeoPoint {
    GeoPoint {
        latitude: 12.97,
        longitude: 77.59,
        accuracy: 8.0,
        altitude: None,
        heading: None,
        speed: None,
    }
}

#[test]
fn sos_with_fix_carries_coordinates() {
    let request = sos_request(Some(fix()), true);
    assert_eq!(request.latitude, Some(12.97));
    assert_eq!(request.longitude, Some(77.59));
    assert_eq!(request.accuracy, Some(8.0));
    assert_eq!(request.alert_type, "emergency");
    assert_eq!(request.message, "Emergency assistance needed");
}

#[test]
fn sos_without_fix_explains_location_unavailable() {
    let request = sos_request(None, true);
    assert_eq!(request.latitude, None);
    assert_eq!(request.message, "Emergency assistance needed - location unavailable");
}

#[test]
fn sos_without_geolocation_support_says_so() {
    let request = sos_request(None, false);
    assert_eq!(request.latitude, None);
    assert_eq!(request.message, "Emergency assistance needed - geolocation not supported");
}
