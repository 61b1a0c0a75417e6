use std::cell::RefCell;

use super::*;
use crate::state::session::{TOKEN_KEY, USER_KEY};

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("/login"), format!("{API_BASE}/login"));
}

#[test]
fn authorization_value_wraps_stored_token_as_bearer() {
    let storage = StorageHandle::memory();
    storage.write(TOKEN_KEY, "tok_123");
    assert_eq!(authorization_value(&storage), Some("Bearer tok_123".to_owned()));
}

#[test]
fn authorization_value_absent_without_token() {
    let storage = StorageHandle::memory();
    assert_eq!(authorization_value(&storage), None);
}

#[test]
fn error_from_body_extracts_backend_message() {
    let message = error_from_body(r#"{"error":"invalid credentials"}"#, "Login failed");
    assert_eq!(message, "invalid credentials");
}

#[test]
fn error_from_body_falls_back_without_error_field() {
    assert_eq!(error_from_body(r#"{"detail":"nope"}"#, "Login failed"), "Login failed");
    assert_eq!(error_from_body("not json", "Login failed"), "Login failed");
    assert_eq!(error_from_body("", "Login failed"), "Login failed");
}

#[test]
fn expire_session_clears_both_keys_and_navigates_to_login() {
    let storage = StorageHandle::memory();
    storage.write(USER_KEY, r#"{"id":1}"#);
    storage.write(TOKEN_KEY, "tok");
    let visited = RefCell::new(Vec::new());

    expire_session(&storage, |route| visited.borrow_mut().push(route.to_owned()));

    assert_eq!(storage.read(USER_KEY), None);
    assert_eq!(storage.read(TOKEN_KEY), None);
    assert_eq!(*visited.borrow(), vec![LOGIN_ROUTE.to_owned()]);
}

#[test]
fn expire_session_is_safe_to_run_twice() {
    let storage = StorageHandle::memory();
    storage.write(TOKEN_KEY, "tok");
    let count = RefCell::new(0);

    expire_session(&storage, |_| *count.borrow_mut() += 1);
    expire_session(&storage, |_| *count.borrow_mut() += 1);

    assert_eq!(storage.read(TOKEN_KEY), None);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn api_error_displays_extracted_message() {
    let err = ApiError::Http { status: 400, message: "invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn timeout_and_network_errors_are_generic() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}
