//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::auth::AuthProvider;
use crate::components::{EmptyState, Header, Sidebar};
use crate::pages::Dashboard;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Mobile sidebar state
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <AuthProvider>
            <Router>
                <div class="app">
                    <Header />
                    <div class="layout">
                        <Sidebar sidebar_open set_sidebar_open />
                        <main class="content">
                            <Routes fallback=|| "Not found">
                                <Route path=path!("/") view=Dashboard />
                                <Route
                                    path=path!("/vital-signs")
                                    view=|| view! {
                                        <EmptyState
                                            title="Vital Signs"
                                            description="Camera-based heart rate screening. Point the camera at your face and hold still for 30 seconds to measure pulse from subtle skin color changes."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/vision-test")
                                    view=|| view! {
                                        <EmptyState
                                            title="Vision Test"
                                            description="Visual acuity and color perception checks using on-screen optotypes. Calibrate your viewing distance before starting."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/hearing-test")
                                    view=|| view! {
                                        <EmptyState
                                            title="Hearing Test"
                                            description="Pure-tone hearing threshold check across the speech frequency range. Use headphones in a quiet room."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/respiration")
                                    view=|| view! {
                                        <EmptyState
                                            title="Respiration"
                                            description="Breathing rate measured from chest motion captured by the camera. Sit upright and breathe normally."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/vital-signs-analysis")
                                    view=|| view! {
                                        <EmptyState
                                            title="Vital Signs Analysis"
                                            description="Trends and history across your screenings: resting heart rate over time, respiration baselines, and flagged outliers."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/emergency-contacts")
                                    view=|| view! {
                                        <EmptyState
                                            title="Emergency Contacts"
                                            description="People to notify when readings cross critical thresholds. Contacts are stored locally and never shared."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/profile")
                                    view=|| view! {
                                        <EmptyState
                                            title="Profile"
                                            description="Personal details used for screening baselines: age range, height, and known conditions."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/preferences")
                                    view=|| view! {
                                        <EmptyState
                                            title="Preferences"
                                            description="Theme and application preferences, including the dark/light color scheme."
                                        />
                                    }
                                />
                                <Route
                                    path=path!("/legacy-reports")
                                    view=|| view! {
                                        <EmptyState
                                            title="Legacy Reports"
                                            description="Reports generated by the previous app version, kept read-only for reference."
                                        />
                                    }
                                />
                            </Routes>
                        </main>
                    </div>
                </div>
            </Router>
        </AuthProvider>
    }
}
