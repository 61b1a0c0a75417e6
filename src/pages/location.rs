//! Location sharing: one-off position fixes, live tracking and history.
//!
//! Live tracking announces the session to the backend, then pushes every
//! watch sample. Stopping clears the browser watch immediately; any sample
//! already in flight is dropped by the `tracking` guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::{LiveLocation, TrackRequest};
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;
use crate::util::geo::{self, GeoPoint};

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

const TRACK_INTERVAL_SECONDS: u32 = 15;

fn live_sample(point: GeoPoint) -> LiveLocation {
    LiveLocation {
        latitude: point.latitude,
        longitude: point.longitude,
        accuracy: point.accuracy,
        altitude: point.altitude,
        heading: point.heading,
        speed: point.speed,
        location_source: "gps".to_owned(),
    }
}

fn format_fix(point: GeoPoint) -> String {
    format!(
        "{:.5}, {:.5} (±{:.0} m)",
        point.latitude, point.longitude, point.accuracy,
    )
}

#[component]
pub fn LocationPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(store.clone(), use_navigate());

    let user_id = Signal::derive({
        let store = store.clone();
        move || store.user().map(|u| u.id)
    });

    let history = LocalResource::new(move || {
        let user_id = user_id.get();
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_location_history(id, 20).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    let latest_fix = RwSignal::new(None::<GeoPoint>);
    let watch_id = RwSignal::new(None::<i32>);
    // Guard against watch samples that land after the user pressed stop.
    let tracking = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let locate_once = move |_| {
        error.set(None);
        geo::current_position(
            move |point| latest_fix.set(Some(point)),
            move |msg| error.set(Some(msg)),
        );
    };

    let stop_tracking = move || {
        tracking.set(false);
        if let Some(id) = watch_id.get_untracked() {
            geo::clear_watch(id);
            watch_id.set(None);
        }
        history.refetch();
    };

    let start_tracking = move || {
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        error.set(None);
        tracking.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request = TrackRequest {
                interval: TRACK_INTERVAL_SECONDS,
                high_accuracy: true,
            };
            if let Err(err) = crate::net::api::start_tracking(id, &request).await {
                tracking.set(false);
                error.set(Some(err.to_string()));
                return;
            }
            let handle = geo::watch_position(
                move |point| {
                    if !tracking.get_untracked() {
                        return;
                    }
                    latest_fix.set(Some(point));
                    leptos::task::spawn_local(async move {
                        if let Err(err) =
                            crate::net::api::push_live_location(id, &live_sample(point)).await
                        {
                            error.set(Some(err.to_string()));
                        }
                    });
                },
                move |msg| error.set(Some(msg)),
            );
            match handle {
                Some(handle) if tracking.get_untracked() => watch_id.set(Some(handle)),
                // Stop was pressed while the watch was being registered.
                Some(handle) => geo::clear_watch(handle),
                None => tracking.set(false),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            tracking.set(false);
            error.set(Some("Geolocation is not supported by this browser".to_owned()));
        }
    };

    let toggle_tracking = move |_| {
        if tracking.get_untracked() {
            stop_tracking();
        } else {
            start_tracking();
        }
    };

    view! {
        <div class="page location-page">
            <header class="page__header">
                <h1>"Location"</h1>
                <p class="page__subtitle">"Share where you are with the people who matter."</p>
            </header>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <section class="card">
                <h2>"Current position"</h2>
                <p class="location__fix">
                    {move || {
                        latest_fix
                            .get()
                            .map_or_else(|| "No fix yet".to_owned(), format_fix)
                    }}
                </p>
                <div class="form__actions">
                    <button type="button" class="button" on:click=locate_once>
                        "Locate me"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            if tracking.get() { "button button--danger" } else { "button" }
                        }
                        on:click=toggle_tracking
                    >
                        {move || {
                            if tracking.get() { "Stop live tracking" } else { "Start live tracking" }
                        }}
                    </button>
                </div>
            </section>

            <Suspense fallback=move || view! { <p class="loading">"Loading history..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Ok(h) if h.locations.is_empty() => {
                                view! { <p class="empty">"No locations recorded yet."</p> }
                                    .into_any()
                            }
                            Ok(h) => {
                                view! {
                                    <section class="card">
                                        <h2>"Recent locations"</h2>
                                        <ul class="location-list">
                                            {h.locations
                                                .into_iter()
                                                .map(|point| {
                                                    view! {
                                                        <li class="location-list__item">
                                                            <span>
                                                                {format!(
                                                                    "{:.5}, {:.5}",
                                                                    point.latitude,
                                                                    point.longitude,
                                                                )}
                                                            </span>
                                                            <span>
                                                                {point
                                                                    .address
                                                                    .unwrap_or_else(|| format!(
                                                                        "±{:.0} m",
                                                                        point.accuracy,
                                                                    ))}
                                                            </span>
                                                            <span>{point.timestamp}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </section>
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
