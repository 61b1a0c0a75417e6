use super::*;

fn sample_user() -> User {
    User {
        id: 7,
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+911234567890".to_owned(),
        age: Some(29),
        blood_group: Some("O+".to_owned()),
        medical_conditions: None,
    }
}

fn seeded_storage() -> StorageHandle {
    let storage = StorageHandle::memory();
    let raw = serde_json::to_string(&sample_user()).expect("serializable user");
    storage.write(USER_KEY, &raw);
    storage.write(TOKEN_KEY, "tok_abc");
    storage
}

// =============================================================
// Initialization from durable storage
// =============================================================

#[test]
fn restores_persisted_session() {
    let store = SessionStore::new(seeded_storage());
    assert!(store.is_authenticated());
    assert_eq!(store.user(), Some(sample_user()));
    assert_eq!(store.session().token, Some("tok_abc".to_owned()));
}

#[test]
fn starts_signed_out_with_empty_storage() {
    let store = SessionStore::new(StorageHandle::memory());
    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
}

#[test]
fn token_without_identity_restores_signed_out() {
    let storage = StorageHandle::memory();
    storage.write(TOKEN_KEY, "tok_abc");
    let store = SessionStore::new(storage);
    assert!(!store.is_authenticated());
    assert_eq!(store.session().token, None);
}

#[test]
fn malformed_stored_identity_restores_signed_out() {
    let storage = StorageHandle::memory();
    storage.write(USER_KEY, "th{is is not json");
    storage.write(TOKEN_KEY, "tok_abc");
    let store = SessionStore::new(storage);
    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
}

// =============================================================
// Commit and round-trip persistence
// =============================================================

#[test]
fn committed_session_survives_reinitialization() {
    let storage = StorageHandle::memory();
    let store = SessionStore::new(storage.clone());
    store.commit(sample_user(), "tok_fresh".to_owned());
    assert!(store.is_authenticated());

    // Simulated reload: a fresh store over the same storage.
    let reloaded = SessionStore::new(storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.user(), Some(sample_user()));
    assert_eq!(reloaded.session().token, Some("tok_fresh".to_owned()));
}

#[test]
fn commit_writes_both_storage_keys() {
    let storage = StorageHandle::memory();
    let store = SessionStore::new(storage.clone());
    store.commit(sample_user(), "tok_fresh".to_owned());
    assert!(storage.read(USER_KEY).is_some());
    assert_eq!(storage.read(TOKEN_KEY), Some("tok_fresh".to_owned()));
}

// =============================================================
// Profile updates
// =============================================================

#[test]
fn applied_profile_update_persists_and_keeps_the_token() {
    let storage = seeded_storage();
    let store = SessionStore::new(storage.clone());
    store.apply_profile(&crate::net::types::ProfileUpdate {
        name: "Asha Rao".to_owned(),
        email: "asha.rao@example.com".to_owned(),
        phone: "+919999999999".to_owned(),
        age: Some(30),
        blood_group: String::new(),
        medical_conditions: "asthma".to_owned(),
    });

    let reloaded = SessionStore::new(storage);
    let user = reloaded.user().expect("still signed in");
    assert_eq!(user.name, "Asha Rao");
    assert_eq!(user.age, Some(30));
    assert_eq!(user.blood_group, None);
    assert_eq!(user.medical_conditions, Some("asthma".to_owned()));
    assert_eq!(reloaded.session().token, Some("tok_abc".to_owned()));
}

#[test]
fn profile_update_while_signed_out_is_ignored() {
    let storage = StorageHandle::memory();
    let store = SessionStore::new(storage.clone());
    store.apply_profile(&crate::net::types::ProfileUpdate {
        name: "Ghost".to_owned(),
        email: "ghost@example.com".to_owned(),
        phone: "+910000000000".to_owned(),
        age: None,
        blood_group: String::new(),
        medical_conditions: String::new(),
    });
    assert!(!store.is_authenticated());
    assert_eq!(storage.read(USER_KEY), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let storage = seeded_storage();
    let store = SessionStore::new(storage.clone());
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(storage.read(USER_KEY), None);
    assert_eq!(storage.read(TOKEN_KEY), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let storage = seeded_storage();
    let store = SessionStore::new(storage.clone());
    store.logout();
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(storage.read(USER_KEY), None);
    assert_eq!(storage.read(TOKEN_KEY), None);
}

#[test]
fn logout_when_already_signed_out_is_a_no_op() {
    let store = SessionStore::new(StorageHandle::memory());
    store.logout();
    assert!(!store.is_authenticated());
}

// =============================================================
// Failed login leaves state untouched
// =============================================================

#[test]
fn failed_login_mutates_nothing() {
    let storage = StorageHandle::memory();
    let store = SessionStore::new(storage.clone());

    // Outside the browser the pipeline fails before any network activity,
    // exercising the same no-mutation path as a rejected login.
    let result = futures::executor::block_on(
        store.login("asha@example.com".to_owned(), "+911234567890".to_owned()),
    );

    assert!(result.is_err());
    assert!(!store.is_authenticated());
    assert_eq!(storage.read(USER_KEY), None);
    assert_eq!(storage.read(TOKEN_KEY), None);
}

#[test]
fn failed_register_mutates_nothing() {
    let storage = StorageHandle::memory();
    let store = SessionStore::new(storage.clone());

    let result = futures::executor::block_on(store.register(RegisterRequest {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+911234567890".to_owned(),
        ..RegisterRequest::default()
    }));

    assert!(result.is_err());
    assert!(!store.is_authenticated());
    assert_eq!(storage.read(TOKEN_KEY), None);
}

// =============================================================
// Session invariant
// =============================================================

#[test]
fn session_is_authenticated_only_with_both_halves() {
    assert!(!Session::default().is_authenticated());
    let partial = Session { user: Some(sample_user()), token: None };
    assert!(!partial.is_authenticated());
    let full = Session { user: Some(sample_user()), token: Some("t".to_owned()) };
    assert!(full.is_authenticated());
}
