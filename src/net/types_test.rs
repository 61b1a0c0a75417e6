use super::*;

#[test]
fn auth_response_decodes_full_profile() {
    let raw = r#"{
        "user": {
            "id": 7,
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "+911234567890",
            "age": 29,
            "blood_group": "O+",
            "medical_conditions": "none"
        },
        "token": "tok_abc"
    }"#;
    let decoded: AuthResponse = serde_json::from_str(raw).expect("valid auth response");
    assert_eq!(decoded.user.id, 7);
    assert_eq!(decoded.user.age, Some(29));
    assert_eq!(decoded.token, "tok_abc");
}

#[test]
fn user_decodes_without_optional_fields() {
    let raw = r#"{"id":1,"name":"A","email":"a@b.c","phone":"123"}"#;
    let decoded: User = serde_json::from_str(raw).expect("valid user");
    assert_eq!(decoded.age, None);
    assert_eq!(decoded.blood_group, None);
    assert_eq!(decoded.medical_conditions, None);
}

#[test]
fn dashboard_decodes_empty_object() {
    let decoded: DashboardData = serde_json::from_str("{}").expect("sparse dashboard");
    assert!(decoded.emergency_contacts.is_empty());
    assert!(decoded.sos_alerts.is_empty());
    assert!(decoded.pregnancy_tracker.is_none());
}

#[test]
fn sos_request_omits_absent_coordinates() {
    let request = SosRequest {
        latitude: None,
        longitude: None,
        accuracy: None,
        alert_type: "emergency".to_owned(),
        message: "Emergency assistance needed - location unavailable".to_owned(),
    };
    let raw = serde_json::to_string(&request).expect("serializable");
    assert!(!raw.contains("latitude"));
    assert!(raw.contains("\"alert_type\":\"emergency\""));
}

#[test]
fn register_request_omits_absent_profile_fields() {
    let request = RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.c".to_owned(),
        phone: "123".to_owned(),
        ..RegisterRequest::default()
    };
    let raw = serde_json::to_string(&request).expect("serializable");
    assert!(!raw.contains("blood_group"));
    assert!(!raw.contains("age"));
}

#[test]
fn location_history_defaults_to_empty() {
    let decoded: LocationHistory = serde_json::from_str("{}").expect("sparse history");
    assert!(decoded.locations.is_empty());
}

#[test]
fn maternity_dashboard_decodes_without_guide() {
    let raw = r#"{
        "due_date": "2026-03-01",
        "current_week": 12,
        "days_pregnant": 84,
        "days_remaining": 196,
        "trimester": 1
    }"#;
    let decoded: MaternityDashboard = serde_json::from_str(raw).expect("valid dashboard");
    assert_eq!(decoded.trimester, 1);
    assert!(decoded.current_week_guide.is_none());
}
