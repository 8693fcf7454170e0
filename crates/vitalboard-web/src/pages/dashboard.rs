//! Dashboard page component

use leptos::prelude::*;

use crate::auth::use_auth;

/// Dashboard page - screening overview
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || match auth.user().and_then(|u| u.display_name) {
        Some(name) => format!("Welcome back, {}", name),
        None => "Welcome".to_string(),
    };

    view! {
        <div class="page dashboard-page">
            <h2>{greeting}</h2>
            <div class="page-content">
                <p>"Pick a screening module from the menu to start a measurement."</p>
                <p class="hint">
                    "Recent results and flagged readings will appear here once a screening has been completed."
                </p>
            </div>
        </div>
    }
}
