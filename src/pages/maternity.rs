//! Maternity tracker: pregnancy progress, symptom log, kick counter and
//! contraction timer.
//!
//! Until a pregnancy is started the dashboard endpoint errors, and the page
//! shows the start form instead. Kick sessions and contractions are timed in
//! the browser and only the finished measurement is sent to the backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::{
    ContractionReport, KickSessionReport, MaternityDashboard, StartPregnancy, SymptomForm,
};
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[cfg(test)]
#[path = "maternity_test.rs"]
mod maternity_test;

fn parse_severity(raw: &str) -> Result<i64, String> {
    let severity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Severity must be a number from 1 to 5".to_owned())?;
    if (1..=5).contains(&severity) {
        Ok(severity)
    } else {
        Err("Severity must be a number from 1 to 5".to_owned())
    }
}

/// Elapsed whole seconds between two `Date.now()` readings, never negative.
#[allow(clippy::cast_possible_truncation)]
fn contraction_seconds(start_ms: f64, end_ms: f64) -> i64 {
    let elapsed = ((end_ms - start_ms) / 1000.0).round();
    if elapsed.is_finite() && elapsed > 0.0 { elapsed as i64 } else { 0 }
}

#[cfg(feature = "csr")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(feature = "csr"))]
fn now_iso() -> String {
    String::new()
}

#[cfg(feature = "csr")]
fn now_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(feature = "csr"))]
fn now_millis() -> f64 {
    0.0
}

#[component]
pub fn MaternityPage() -> impl IntoView {
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
                Some(id) => crate::net::api::fetch_maternity_dashboard(id).await,
                None => Err(ApiError::Unauthorized),
            }
        }
    });

    view! {
        <div class="page maternity-page">
            <header class="page__header">
                <h1>"Maternity Tracker"</h1>
                <p class="page__subtitle">"Follow your pregnancy week by week."</p>
            </header>

            <Suspense fallback=move || view! { <p class="loading">"Loading tracker..."</p> }>
                {move || {
                    let id = user_id.get()?;
                    dashboard
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <ProgressCard data=data/>
                                    <SymptomLog user_id=id/>
                                    <KickCounter user_id=id/>
                                    <ContractionTimer user_id=id/>
                                }
                                    .into_any()
                            }
                            // No tracker yet: offer to start one.
                            Err(_) => {
                                view! {
                                    <StartForm
                                        user_id=id
                                        on_started=Callback::new(move |()| dashboard.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProgressCard(data: MaternityDashboard) -> impl IntoView {
    view! {
        <section class="card card--progress">
            <h2>{format!("Week {}, trimester {}", data.current_week, data.trimester)}</h2>
            <p>{format!("Due date: {}", data.due_date)}</p>
            <p>
                {format!(
                    "{} days pregnant, {} days to go",
                    data.days_pregnant,
                    data.days_remaining,
                )}
            </p>
            {data
                .current_week_guide
                .map(|guide| {
                    view! {
                        <div class="week-guide">
                            <h3>{guide.title}</h3>
                            <p>{guide.baby_development}</p>
                            <p>{guide.mother_changes}</p>
                            <p class="week-guide__tips">{guide.tips}</p>
                        </div>
                    }
                })}
        </section>
    }
}

#[component]
fn StartForm(user_id: i64, on_started: Callback<()>) -> impl IntoView {
    let lmp_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let lmp = lmp_date.get_untracked().trim().to_owned();
        if lmp.is_empty() {
            error.set(Some("Please pick the first day of your last period".to_owned()));
            return;
        }
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::start_pregnancy(user_id, &StartPregnancy { lmp_date: lmp }).await
            {
                Ok(()) => on_started.run(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, lmp, on_started);
        }
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"Start pregnancy tracking"</h2>
            <p>"We use the first day of your last period to estimate your due date."</p>
            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
            <label class="form__field">
                "Last period start date"
                <input
                    type="date"
                    prop:value=lmp_date
                    on:input=move |ev| lmp_date.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="button">
                "Start tracking"
            </button>
        </form>
    }
}

#[component]
fn SymptomLog(user_id: i64) -> impl IntoView {
    let symptoms = LocalResource::new(move || async move {
        crate::net::api::fetch_symptoms(user_id).await
    });

    let symptom_name = RwSignal::new(String::new());
    let severity = RwSignal::new("3".to_owned());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = symptom_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            error.set(Some("Symptom name is required".to_owned()));
            return;
        }
        let level = match parse_severity(&severity.get_untracked()) {
            Ok(level) => level,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let form = SymptomForm {
            symptom_name: name,
            severity: level,
            notes: notes.get_untracked().trim().to_owned(),
        };
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::log_symptom(user_id, &form).await {
                Ok(()) => {
                    symptom_name.set(String::new());
                    notes.set(String::new());
                    symptoms.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, form);
        }
    };

    view! {
        <section class="card">
            <h2>"Symptoms"</h2>
            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
            <form class="form form--inline" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Symptom"
                    prop:value=symptom_name
                    on:input=move |ev| symptom_name.set(event_target_value(&ev))
                />
                <select on:change=move |ev| severity.set(event_target_value(&ev))>
                    <option value="1">"1 - mild"</option>
                    <option value="2">"2"</option>
                    <option value="3" selected>"3"</option>
                    <option value="4">"4"</option>
                    <option value="5">"5 - severe"</option>
                </select>
                <input
                    type="text"
                    placeholder="Notes"
                    prop:value=notes
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
                <button type="submit" class="button">
                    "Log symptom"
                </button>
            </form>
            <Suspense fallback=move || view! { <p class="loading">"Loading symptoms..."</p> }>
                {move || {
                    symptoms
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.symptoms.is_empty() => {
                                view! { <p class="empty">"Nothing logged yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="symptom-list">
                                        {list
                                            .symptoms
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <li class="symptom-list__item">
                                                        <span>{s.symptom_name}</span>
                                                        <span>{format!("severity {}", s.severity)}</span>
                                                        <span>{s.log_date}</span>
                                                    </li>
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
        </section>
    }
}

#[component]
fn KickCounter(user_id: i64) -> impl IntoView {
    let sessions = LocalResource::new(move || async move {
        crate::net::api::fetch_kick_sessions(user_id).await
    });

    // Start timestamp of the running session, if any.
    let session_start = RwSignal::new(None::<String>);
    let kick_count = RwSignal::new(0_i64);
    let error = RwSignal::new(None::<String>);

    let start = move |_| {
        session_start.set(Some(now_iso()));
        kick_count.set(0);
        error.set(None);
    };

    let kick = move |_| {
        if session_start.get_untracked().is_some() {
            kick_count.update(|n| *n += 1);
        }
    };

    let finish = move |_| {
        let Some(start_time) = session_start.get_untracked() else {
            return;
        };
        let report = KickSessionReport {
            start_time,
            end_time: now_iso(),
            kick_count: kick_count.get_untracked(),
        };
        session_start.set(None);
        kick_count.set(0);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_kick_session(user_id, &report).await {
                Ok(()) => sessions.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, report);
        }
    };

    view! {
        <section class="card">
            <h2>"Kick counter"</h2>
            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
            <Show
                when=move || session_start.get().is_some()
                fallback=move || {
                    view! {
                        <button type="button" class="button" on:click=start>
                            "Start counting"
                        </button>
                    }
                }
            >
                <p class="kick-counter__count">{move || kick_count.get()}</p>
                <button type="button" class="button button--big" on:click=kick>
                    "Kick!"
                </button>
                <button type="button" class="button button--ghost" on:click=finish>
                    "Finish session"
                </button>
            </Show>
            <Suspense fallback=move || view! { <p class="loading">"Loading sessions..."</p> }>
                {move || {
                    sessions
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.sessions.is_empty() => {
                                view! { <p class="empty">"No sessions recorded."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="session-list">
                                        {list
                                            .sessions
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <li class="session-list__item">
                                                        <span>{format!("{} kicks", s.kick_count)}</span>
                                                        <span>
                                                            {format!("{:.0} min", s.duration_minutes)}
                                                        </span>
                                                        <span>{s.start_time}</span>
                                                    </li>
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
        </section>
    }
}

#[component]
fn ContractionTimer(user_id: i64) -> impl IntoView {
    let contractions = LocalResource::new(move || async move {
        crate::net::api::fetch_contractions(user_id).await
    });

    // `Date.now()` reading when the current contraction began.
    let running_since = RwSignal::new(None::<f64>);
    let error = RwSignal::new(None::<String>);

    let toggle = move |_| {
        if let Some(start_ms) = running_since.get_untracked() {
            running_since.set(None);
            let report = ContractionReport {
                duration_seconds: contraction_seconds(start_ms, now_millis()),
            };
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                match crate::net::api::save_contraction(user_id, &report).await {
                    Ok(()) => contractions.refetch(),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            #[cfg(not(feature = "csr"))]
            {
                let _ = (user_id, report);
            }
        } else {
            running_since.set(Some(now_millis()));
            error.set(None);
        }
    };

    view! {
        <section class="card">
            <h2>"Contraction timer"</h2>
            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
            <button type="button" class="button" on:click=toggle>
                {move || {
                    if running_since.get().is_some() {
                        "Contraction ended"
                    } else {
                        "Contraction started"
                    }
                }}
            </button>
            <Suspense fallback=move || view! { <p class="loading">"Loading contractions..."</p> }>
                {move || {
                    contractions
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.contractions.is_empty() => {
                                view! { <p class="empty">"No contractions timed."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="session-list">
                                        {list
                                            .contractions
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <li class="session-list__item">
                                                        <span>{format!("{}s", c.duration_seconds)}</span>
                                                        <span>
                                                            {c
                                                                .frequency_minutes
                                                                .map_or_else(
                                                                    || "first of the series".to_owned(),
                                                                    |f| format!("{f:.1} min apart"),
                                                                )}
                                                        </span>
                                                        <span>{c.start_time}</span>
                                                    </li>
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
        </section>
    }
}
