//! One-tap SOS trigger with graceful location fallback.
//!
//! The alert goes out in all three situations: with a fresh position fix,
//! with geolocation present but failing, and on devices without geolocation
//! at all. Only the message and the presence of coordinates differ; the
//! backend fans the alert out to emergency contacts either way.

#[cfg(test)]
#[path = "sos_button_test.rs"]
mod sos_button_test;

use leptos::prelude::*;

use crate::net::types::SosRequest;
use crate::util::geo::{self, GeoPoint};

/// Build the alert payload for whatever location information is available.
fn sos_request(point: Option<GeoPoint>, geolocation_supported: bool) -> SosRequest {
    let message = match (point.is_some(), geolocation_supported) {
        (true, _) => "Emergency assistance needed",
        (false, true) => "Emergency assistance needed - location unavailable",
        (false, false) => "Emergency assistance needed - geolocation not supported",
    };
    SosRequest {
        latitude: point.map(|p| p.latitude),
        longitude: point.map(|p| p.longitude),
        accuracy: point.map(|p| p.accuracy),
        alert_type: "emergency".to_owned(),
        message: message.to_owned(),
    }
}

#[component]
pub fn SosButton(user_id: i64, #[prop(optional)] on_sent: Option<Callback<()>>) -> impl IntoView {
    let status = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let dispatch = Callback::new(move |request: SosRequest| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::send_sos(user_id, &request).await {
                    Ok(()) => {
                        status.set(
                            "SOS alert sent. Your emergency contacts have been notified."
                                .to_owned(),
                        );
                        if let Some(on_sent) = on_sent {
                            on_sent.run(());
                        }
                    }
                    Err(err) => status.set(format!("Failed to send SOS alert: {err}")),
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, request);
        }
    });

    let on_click = move |_| {
        if sending.get() {
            return;
        }
        sending.set(true);
        status.set("Sending SOS alert...".to_owned());
        if geo::supported() {
            geo::current_position(
                move |point| dispatch.run(sos_request(Some(point), true)),
                move |_| dispatch.run(sos_request(None, true)),
            );
        } else {
            dispatch.run(sos_request(None, false));
        }
    };

    view! {
        <div class="sos">
            <button class="btn btn--sos" on:click=on_click disabled=move || sending.get()>
                "🚨 Send SOS Alert"
            </button>
            <Show when=move || !status.get().is_empty()>
                <p class="sos__status">{move || status.get()}</p>
            </Show>
        </div>
    }
}
