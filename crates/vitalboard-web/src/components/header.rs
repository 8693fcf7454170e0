//! Header component

use leptos::prelude::*;

/// Header with wordmark and subtitle; the mobile menu button lives in the
/// sidebar itself.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"vitalboard"</h1>
                <p class="subtitle">"Camera-based health screening"</p>
            </div>
        </header>
    }
}
