//! Emergency contacts: list, add, edit and remove trusted people.
//!
//! The backend has no update endpoint for contacts, so editing replaces the
//! record: delete the old row, then recreate it from the form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::{ContactForm, EmergencyContact};
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn EmergencyContactsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(store.clone(), use_navigate());

    let user_id = Signal::derive({
        let store = store.clone();
        move || store.user().map(|u| u.id)
    });

    let contacts = LocalResource::new(move || {
        let user_id = user_id.get();
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_contacts(id).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    let name = RwSignal::new(String::new());
    let relationship = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let is_primary = RwSignal::new(false);
    // Id of the contact being edited; saving deletes it before recreating.
    let editing = RwSignal::new(None::<i64>);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let reset_form = move || {
        name.set(String::new());
        relationship.set(String::new());
        phone.set(String::new());
        email.set(String::new());
        is_primary.set(false);
        editing.set(None);
    };

    let begin_edit = Callback::new(move |contact: EmergencyContact| {
        name.set(contact.name);
        relationship.set(contact.relationship);
        phone.set(contact.phone);
        email.set(contact.email);
        is_primary.set(contact.is_primary);
        editing.set(Some(contact.id));
        error.set(None);
    });

    let remove = Callback::new(move |contact_id: i64| {
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_contact(id, contact_id).await {
                Ok(()) => contacts.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, contact_id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let form = ContactForm {
            name: name.get_untracked().trim().to_owned(),
            relationship: relationship.get_untracked().trim().to_owned(),
            phone: phone.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            is_primary: is_primary.get_untracked(),
        };
        if form.name.is_empty() || form.phone.is_empty() {
            error.set(Some("Name and phone number are required".to_owned()));
            return;
        }
        let replacing = editing.get_untracked();
        error.set(None);
        saving.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = async {
                if let Some(old_id) = replacing {
                    crate::net::api::delete_contact(id, old_id).await?;
                }
                crate::net::api::create_contact(id, &form).await
            }
            .await;
            saving.set(false);
            match result {
                Ok(()) => {
                    reset_form();
                    contacts.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, form, replacing);
        }
    };

    view! {
        <div class="page contacts-page">
            <header class="page__header">
                <h1>"Emergency Contacts"</h1>
                <p class="page__subtitle">
                    "These people are notified when you trigger an SOS alert."
                </p>
            </header>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <form class="card form" on:submit=on_submit>
                <h2>
                    {move || if editing.get().is_some() { "Edit contact" } else { "Add a contact" }}
                </h2>
                <label class="form__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Relationship"
                    <input
                        type="text"
                        prop:value=relationship
                        on:input=move |ev| relationship.set(event_target_value(&ev))
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
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field form__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=is_primary
                        on:change=move |ev| is_primary.set(event_target_checked(&ev))
                    />
                    "Primary contact"
                </label>
                <div class="form__actions">
                    <button type="submit" class="button" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save contact" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="button button--ghost" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <Suspense fallback=move || view! { <p class="loading">"Loading contacts..."</p> }>
                {move || {
                    contacts
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.contacts.is_empty() => {
                                view! {
                                    <p class="empty">
                                        "No emergency contacts yet. Add someone you trust."
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="contact-list">
                                        {list
                                            .contacts
                                            .into_iter()
                                            .map(|contact| {
                                                view! {
                                                    <ContactRow
                                                        contact=contact
                                                        on_edit=begin_edit
                                                        on_remove=remove
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="error-banner">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ContactRow(
    contact: EmergencyContact,
    on_edit: Callback<EmergencyContact>,
    on_remove: Callback<i64>,
) -> impl IntoView {
    let contact_id = contact.id;
    let primary = contact.is_primary;
    let edit_copy = contact.clone();

    view! {
        <li class="contact-list__item">
            <div class="contact-list__details">
                <span class="contact-list__name">
                    {contact.name}
                    <Show when=move || primary>
                        <span class="badge">"Primary"</span>
                    </Show>
                </span>
                <span class="contact-list__meta">{contact.relationship}</span>
                <span class="contact-list__meta">{contact.phone}</span>
                <span class="contact-list__meta">{contact.email}</span>
            </div>
            <div class="contact-list__actions">
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| on_edit.run(edit_copy.clone())
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="button button--danger"
                    on:click=move |_| on_remove.run(contact_id)
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
