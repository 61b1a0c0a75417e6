//! Login page: email + phone sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let phone_value = phone.get().trim().to_owned();
        if email_value.is_empty() || phone_value.is_empty() {
            error.set("Enter both email and phone number.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.login(email_value, phone_value).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, phone_value, &store, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your Womecare account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Phone"</label>
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="+91 12345 67890"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "New to Womecare? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
