//! Empty state component for screening modules not yet wired up

use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder page for a module whose measurement flow is still being
/// ported from the legacy app.
#[component]
pub fn EmptyState(
    /// Module title (e.g., "Vital Signs")
    title: &'static str,
    /// What this module does once available
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Activity pulse icon (lucide-activity)
                    <path d="M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title} " - In Development"</h2>
            <p class="empty-state-description">{description}</p>

            <div class="empty-state-actions">
                <A href="/" attr:class="btn btn-primary">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="m12 19-7-7 7-7"/>
                        <path d="M19 12H5"/>
                    </svg>
                    " Back to Dashboard"
                </A>
            </div>
        </div>
    }
}
