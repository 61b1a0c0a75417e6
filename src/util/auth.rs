//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route applies identical unauthenticated redirect
//! behavior by installing this guard on mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};

/// True when a route guard should bounce this session to the login page.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever no authenticated session is present.
pub fn install_unauth_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let session = store.session();
        if should_redirect_unauth(&session) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
