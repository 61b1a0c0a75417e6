//! Top navigation bar, auth-aware.
//!
//! Signed-out visitors see sign-in / get-started actions; signed-in users
//! get the full feature navigation plus a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

const NAV_LINKS: [(&str, &str); 7] = [
    ("/dashboard", "Dashboard"),
    ("/emergency-contacts", "Emergency Contacts"),
    ("/period-tracker", "Period Tracker"),
    ("/maternity", "Maternity"),
    ("/location", "Location"),
    ("/community", "Community"),
    ("/profile", "Profile"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let authed = {
        let store = store.clone();
        move || store.is_authenticated()
    };

    let on_logout = {
        let store = store.clone();
        move |_| {
            store.logout();
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo">"♥"</span>
                <span>"Womecare"</span>
            </a>
            <Show
                when=authed
                fallback=|| {
                    view! {
                        <div class="navbar__actions">
                            <a class="btn btn--ghost" href="/login">"Sign In"</a>
                            <a class="btn btn--primary" href="/register">"Get Started"</a>
                        </div>
                    }
                }
            >
                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! { <a class="navbar__link" href=*href>{*label}</a> }
                        })
                        .collect_view()}
                    <button class="btn btn--ghost" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}
