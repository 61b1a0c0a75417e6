//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

const FEATURES: [(&str, &str); 6] = [
    ("Emergency SOS", "One tap alerts your emergency contacts with your live location."),
    ("Emergency Contacts", "Keep the people who matter one alert away."),
    ("Period Tracker", "Log cycles and get predictions for the next one."),
    ("Maternity", "Week-by-week pregnancy tracking, kick counter and contraction timer."),
    ("Location Sharing", "Share where you are with the people you trust."),
    ("Community", "Ask, share and support in a safe space."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let authed = move || store.is_authenticated();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Your safety and health companion"</h1>
                <p class="hero__subtitle">
                    "Womecare brings emergency alerting, cycle and pregnancy tracking, "
                    "location sharing and a supportive community into one app."
                </p>
                <div class="hero__actions">
                    <Show
                        when=authed
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/register">"Get Started"</a>
                                <a class="btn btn--ghost" href="/login">"Sign In"</a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                    </Show>
                </div>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
