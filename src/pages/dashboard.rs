//! Dashboard: safety overview, recent activity and the SOS trigger.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sos_button::SosButton;
use crate::net::http::ApiError;
use crate::net::types::DashboardData;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(store.clone(), use_navigate());

    let user_id = Signal::derive({
        let store = store.clone();
        move || store.user().map(|u| u.id)
    });

    let dashboard = LocalResource::new(move || {
        let user_id = user_id.get();
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_dashboard(id).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    let greeting = {
        let store = store.clone();
        move || {
            store
                .user()
                .map(|u| format!("Welcome back, {}", u.name))
                .unwrap_or_default()
        }
    };

    let on_sent = Callback::new(move |()| dashboard.refetch());

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>{greeting}</h1>
                <p class="page__subtitle">"Here is your safety and health overview."</p>
            </header>

            <Suspense fallback=move || {
                view! { <p class="loading">"Loading your dashboard..."</p> }
            }>
                {move || {
                    let id = user_id.get()?;
                    dashboard
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! { <DashboardContent data=data user_id=id on_sent=on_sent/> }
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
fn DashboardContent(data: DashboardData, user_id: i64, on_sent: Callback<()>) -> impl IntoView {
    let contact_count = data.emergency_contacts.len();
    let location_count = data.recent_locations.len();
    let tracking_pregnancy = data.pregnancy_tracker.is_some();
    let alerts = data.sos_alerts;

    view! {
        <section class="card card--sos">
            <h2>"Emergency SOS"</h2>
            <p>"Instantly notify your emergency contacts with your location."</p>
            <SosButton user_id=user_id on_sent=on_sent/>
        </section>

        <section class="dashboard-grid">
            <a class="card card--stat" href="/emergency-contacts">
                <span class="card__count">{contact_count}</span>
                <span class="card__label">"Emergency contacts"</span>
            </a>
            <a class="card card--stat" href="/location">
                <span class="card__count">{location_count}</span>
                <span class="card__label">"Recent locations"</span>
            </a>
            <a class="card card--stat" href="/maternity">
                <span class="card__label">
                    {if tracking_pregnancy {
                        "Pregnancy tracking active"
                    } else {
                        "Start pregnancy tracking"
                    }}
                </span>
            </a>
            <a class="card card--stat" href="/period-tracker">
                <span class="card__label">"Period tracker"</span>
            </a>
        </section>

        <section class="card">
            <h2>"Recent SOS alerts"</h2>
            {if alerts.is_empty() {
                view! { <p class="empty">"No alerts raised. Stay safe!"</p> }.into_any()
            } else {
                view! {
                    <ul class="alert-list">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                view! {
                                    <li class="alert-list__item">
                                        <span class="alert-list__type">{alert.alert_type}</span>
                                        <span class="alert-list__message">{alert.message}</span>
                                        <span class="alert-list__time">
                                            {alert.created_at.unwrap_or_default()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
