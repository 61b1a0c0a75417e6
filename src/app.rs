//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    community::CommunityPage, dashboard::DashboardPage,
    emergency_contacts::EmergencyContactsPage, home::HomePage, location::LocationPage,
    login::LoginPage, maternity::MaternityPage, period_tracker::PeriodTrackerPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::SessionStore;
use crate::util::storage::StorageHandle;

/// Root application component.
///
/// Restores the persisted session once and provides it via context; every
/// screen reads the same store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::new(StorageHandle::browser()));

    view! {
        <Stylesheet id="app" href="/styles.css"/>
        <Title text="Womecare"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("emergency-contacts") view=EmergencyContactsPage/>
                    <Route path=StaticSegment("period-tracker") view=PeriodTrackerPage/>
                    <Route path=StaticSegment("maternity") view=MaternityPage/>
                    <Route path=StaticSegment("location") view=LocationPage/>
                    <Route path=StaticSegment("community") view=CommunityPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
