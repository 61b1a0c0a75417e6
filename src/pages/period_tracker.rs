//! Period tracker: cycle history, next-period prediction and cycle logging.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::PeriodLog;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[cfg(test)]
#[path = "period_tracker_test.rs"]
mod period_tracker_test;

/// Validate the raw form fields into a log entry.
///
/// Day counts must parse and stay within plausible bounds; the date is
/// required but its format is left to the `<input type="date">` control.
fn build_period_log(
    start_date: &str,
    cycle_length: &str,
    period_length: &str,
    flow_intensity: &str,
    symptoms: &str,
    mood: &str,
    notes: &str,
) -> Result<PeriodLog, String> {
    if start_date.trim().is_empty() {
        return Err("Cycle start date is required".to_owned());
    }
    let cycle_length = parse_days(cycle_length, "Cycle length", 15, 60)?;
    let period_length = parse_days(period_length, "Period length", 1, 14)?;
    Ok(PeriodLog {
        cycle_start_date: start_date.trim().to_owned(),
        cycle_length,
        period_length,
        flow_intensity: flow_intensity.to_owned(),
        symptoms: symptoms.trim().to_owned(),
        mood: mood.trim().to_owned(),
        notes: notes.trim().to_owned(),
    })
}

fn parse_days(raw: &str, label: &str, min: i64, max: i64) -> Result<i64, String> {
    let days: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a number of days"))?;
    if (min..=max).contains(&days) {
        Ok(days)
    } else {
        Err(format!("{label} must be between {min} and {max} days"))
    }
}

#[component]
pub fn PeriodTrackerPage() -> impl IntoView {
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
                Some(id) => crate::net::api::fetch_period_history(id).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    let prediction = LocalResource::new(move || {
        let user_id = user_id.get();
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_period_prediction(id).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    let start_date = RwSignal::new(String::new());
    let cycle_length = RwSignal::new("28".to_owned());
    let period_length = RwSignal::new("5".to_owned());
    let flow_intensity = RwSignal::new("medium".to_owned());
    let symptoms = RwSignal::new(String::new());
    let mood = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let log = match build_period_log(
            &start_date.get_untracked(),
            &cycle_length.get_untracked(),
            &period_length.get_untracked(),
            &flow_intensity.get_untracked(),
            &symptoms.get_untracked(),
            &mood.get_untracked(),
            &notes.get_untracked(),
        ) {
            Ok(log) => log,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::log_period(id, &log).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    start_date.set(String::new());
                    symptoms.set(String::new());
                    mood.set(String::new());
                    notes.set(String::new());
                    history.refetch();
                    prediction.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, log);
        }
    };

    view! {
        <div class="page period-page">
            <header class="page__header">
                <h1>"Period Tracker"</h1>
                <p class="page__subtitle">"Log your cycles and see what to expect next."</p>
            </header>

            <Suspense fallback=move || view! { <p class="loading">"Checking prediction..."</p> }>
                {move || {
                    prediction
                        .get()
                        .map(|result| match result {
                            Ok(p) => {
                                view! {
                                    <section class="card card--prediction">
                                        <h2>"Next period"</h2>
                                        <p class="prediction__date">{p.predicted_date}</p>
                                        <p class="prediction__detail">
                                            {format!(
                                                "Average cycle: {:.1} days",
                                                p.average_cycle_length,
                                            )}
                                        </p>
                                        <p class="prediction__detail">{p.message}</p>
                                    </section>
                                }
                                    .into_any()
                            }
                            // Not enough history yet; the endpoint says so.
                            Err(err) => {
                                view! { <p class="notice">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <form class="card form" on:submit=on_submit>
                <h2>"Log a cycle"</h2>
                <label class="form__field">
                    "Cycle start date"
                    <input
                        type="date"
                        prop:value=start_date
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Cycle length (days)"
                    <input
                        type="number"
                        prop:value=cycle_length
                        on:input=move |ev| cycle_length.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Period length (days)"
                    <input
                        type="number"
                        prop:value=period_length
                        on:input=move |ev| period_length.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Flow intensity"
                    <select on:change=move |ev| flow_intensity.set(event_target_value(&ev))>
                        <option value="light">"Light"</option>
                        <option value="medium" selected>"Medium"</option>
                        <option value="heavy">"Heavy"</option>
                    </select>
                </label>
                <label class="form__field">
                    "Symptoms"
                    <input
                        type="text"
                        prop:value=symptoms
                        on:input=move |ev| symptoms.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Mood"
                    <input
                        type="text"
                        prop:value=mood
                        on:input=move |ev| mood.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Notes"
                    <textarea
                        prop:value=notes
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="button" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Log cycle" }}
                </button>
            </form>

            <Suspense fallback=move || view! { <p class="loading">"Loading history..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Ok(h) if h.periods.is_empty() => {
                                view! { <p class="empty">"No cycles logged yet."</p> }.into_any()
                            }
                            Ok(h) => {
                                view! {
                                    <section class="card">
                                        <h2>"Cycle history"</h2>
                                        <ul class="period-list">
                                            {h.periods
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <li class="period-list__item">
                                                            <span class="period-list__date">
                                                                {entry.cycle_start_date}
                                                            </span>
                                                            <span class="period-list__meta">
                                                                {format!(
                                                                    "{} day cycle, {} day period",
                                                                    entry.cycle_length,
                                                                    entry.period_length,
                                                                )}
                                                            </span>
                                                            <span class="period-list__meta">
                                                                {entry.flow_intensity}
                                                            </span>
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
