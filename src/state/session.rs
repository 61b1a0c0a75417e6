//! Process-wide authentication session: identity, credential, operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is constructed at the application root, restored from
//! durable storage, and provided via context. Screens read it to gate
//! rendering and call `login` / `register` / `logout`; they never touch the
//! storage keys directly. The request pipeline shares the same two keys and
//! may clear them on a 401 without going through the store.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` surface one human-readable string and leave no
//! partial state behind: either identity and credential are both committed
//! or neither is. Malformed persisted state restores as "signed out" rather
//! than propagating an error to the shell.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LoginRequest, RegisterRequest, User};
use crate::util::storage::StorageHandle;

/// Storage key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user";
/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Identity plus credential. Invariant: both present or both absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Rebuild a session from the two storage keys. Anything short of a valid
/// identity + token pair (missing key, unparseable JSON) restores as signed
/// out; expiry of a stale token is discovered later via a failed request.
fn restore(storage: &StorageHandle) -> Session {
    let (Some(raw_user), Some(token)) = (storage.read(USER_KEY), storage.read(TOKEN_KEY)) else {
        return Session::default();
    };
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Session { user: Some(user), token: Some(token) },
        Err(err) => {
            log::warn!("discarding malformed stored identity: {err}");
            Session::default()
        }
    }
}

/// Single source of truth for "who is logged in".
///
/// Cloning is cheap and clones share the same signal and storage, so the
/// handle can be passed freely into event callbacks.
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    storage: StorageHandle,
}

impl SessionStore {
    /// Build the store and restore any persisted session. No network call.
    pub fn new(storage: StorageHandle) -> Self {
        let session = RwSignal::new(restore(&storage));
        Self { session, storage }
    }

    /// Reactive snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Reactive view of the signed-in identity, if any.
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    /// Reactive authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Commit a fresh identity + credential. Storage is written before the
    /// in-memory signal so a reload between the two steps still restores a
    /// complete session.
    fn commit(&self, user: User, token: String) {
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.write(USER_KEY, &raw),
            Err(err) => log::error!("failed to serialize identity: {err}"),
        }
        self.storage.write(TOKEN_KEY, &token);
        self.session.set(Session { user: Some(user), token: Some(token) });
    }

    /// Exchange email + phone for a session. On failure nothing is mutated
    /// and the returned string is ready for display.
    pub async fn login(&self, email: String, phone: String) -> Result<(), String> {
        let request = LoginRequest { email, phone };
        let response = api::login(&request).await.map_err(|e| e.to_string())?;
        log::info!("logged in as user {}", response.user.id);
        self.commit(response.user, response.token);
        Ok(())
    }

    /// Create an account; same contract as `login`.
    pub async fn register(&self, profile: RegisterRequest) -> Result<(), String> {
        let response = api::register(&profile).await.map_err(|e| e.to_string())?;
        log::info!("registered user {}", response.user.id);
        self.commit(response.user, response.token);
        Ok(())
    }

    /// Fold an accepted profile update into the stored identity, keeping the
    /// existing credential. No-op when signed out.
    pub fn apply_profile(&self, update: &crate::net::types::ProfileUpdate) {
        let Session { user: Some(mut user), token: Some(token) } = self.session.get_untracked()
        else {
            return;
        };
        user.name = update.name.clone();
        user.email = update.email.clone();
        user.phone = update.phone.clone();
        user.age = update.age;
        user.blood_group =
            (!update.blood_group.is_empty()).then(|| update.blood_group.clone());
        user.medical_conditions =
            (!update.medical_conditions.is_empty()).then(|| update.medical_conditions.clone());
        self.commit(user, token);
    }

    /// Clear identity and credential everywhere. Idempotent.
    pub fn logout(&self) {
        self.storage.delete(USER_KEY);
        self.storage.delete(TOKEN_KEY);
        self.session.set(Session::default());
    }
}
