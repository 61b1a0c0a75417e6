//! Profile: review and update account and medical details.
//!
//! A successful save also refreshes the stored identity so the rest of the
//! app picks up the new name without a re-login.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ProfileUpdate;
use crate::pages::register::parse_age;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(store.clone(), use_navigate());

    let current = store.user().unwrap_or_default();
    let name = RwSignal::new(current.name);
    let email = RwSignal::new(current.email);
    let phone = RwSignal::new(current.phone);
    let age = RwSignal::new(current.age.map(|a| a.to_string()).unwrap_or_default());
    let blood_group = RwSignal::new(current.blood_group.unwrap_or_default());
    let medical_conditions = RwSignal::new(current.medical_conditions.unwrap_or_default());

    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let on_submit = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(user) = store.user() else {
                return;
            };
            let parsed_age = match parse_age(&age.get_untracked()) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };
            let update = ProfileUpdate {
                name: name.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                phone: phone.get_untracked().trim().to_owned(),
                age: parsed_age,
                blood_group: blood_group.get_untracked().trim().to_owned(),
                medical_conditions: medical_conditions.get_untracked().trim().to_owned(),
            };
            if update.name.is_empty() || update.email.is_empty() || update.phone.is_empty() {
                error.set(Some("Name, email and phone are required".to_owned()));
                return;
            }
            error.set(None);
            saved.set(false);
            saving.set(true);
            let store = store.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_profile(user.id, &update).await;
                saving.set(false);
                match result {
                    Ok(()) => {
                        store.apply_profile(&update);
                        saved.set(true);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            #[cfg(not(feature = "csr"))]
            {
                let _ = (user, update, store);
                saving.set(false);
            }
        }
    };

    view! {
        <div class="page profile-page">
            <header class="page__header">
                <h1>"Profile"</h1>
                <p class="page__subtitle">
                    "Medical details are shared with responders during an SOS."
                </p>
            </header>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
            <Show when=move || saved.get()>
                <p class="notice">"Profile updated."</p>
            </Show>

            <form class="card form" on:submit=on_submit>
                <label class="form__field">
                    "Full name"
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Phone"
                    <input
                        type="tel"
                        prop:value=phone
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Age"
                    <input
                        type="number"
                        prop:value=age
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Blood group"
                    <input
                        type="text"
                        prop:value=blood_group
                        on:input=move |ev| blood_group.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Medical conditions"
                    <textarea
                        prop:value=medical_conditions
                        on:input=move |ev| medical_conditions.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="button" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
