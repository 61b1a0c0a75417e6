use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "123".to_owned(),
        age: None,
        blood_group: None,
        medical_conditions: None,
    }
}

#[test]
fn redirects_when_session_is_empty() {
    assert!(should_redirect_unauth(&Session::default()));
}

#[test]
fn redirects_when_credential_is_missing() {
    let session = Session { user: Some(user()), token: None };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn does_not_redirect_an_authenticated_session() {
    let session = Session { user: Some(user()), token: Some("tok".to_owned()) };
    assert!(!should_redirect_unauth(&session));
}
