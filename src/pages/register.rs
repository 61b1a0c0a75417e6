//! Registration page building the profile record sent to the backend.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::session::SessionStore;

/// Parse the optional age field. Empty input is a valid "not provided".
pub(crate) fn parse_age(input: &str) -> Result<Option<i64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(age) if (1..=120).contains(&age) => Ok(Some(age)),
        _ => Err("Enter a valid age.".to_owned()),
    }
}

/// Empty or whitespace-only optional fields are omitted from the payload.
fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let blood_group = RwSignal::new(String::new());
    let medical_conditions = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let phone_value = phone.get().trim().to_owned();
        if name_value.is_empty() || email_value.is_empty() || phone_value.is_empty() {
            error.set("Name, email and phone are required.".to_owned());
            return;
        }
        let parsed_age = match parse_age(&age.get()) {
            Ok(parsed) => parsed,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        let profile = RegisterRequest {
            name: name_value,
            email: email_value,
            phone: phone_value,
            age: parsed_age,
            blood_group: optional(&blood_group.get()),
            medical_conditions: optional(&medical_conditions.get()),
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.register(profile).await {
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
            let _ = (profile, &store, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">
                    "Safety, health tracking and community in one place"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Name"</label>
                    <input
                        class="auth-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Phone"</label>
                    <input
                        class="auth-input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Age (optional)"</label>
                    <input
                        class="auth-input"
                        type="number"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Blood group (optional)"</label>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="O+"
                        prop:value=move || blood_group.get()
                        on:input=move |ev| blood_group.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Medical conditions (optional)"</label>
                    <textarea
                        class="auth-input"
                        prop:value=move || medical_conditions.get()
                        on:input=move |ev| medical_conditions.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
