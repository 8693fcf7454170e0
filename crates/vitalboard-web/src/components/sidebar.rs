//! Sidebar navigation component
//!
//! Collapsible panel listing the fixed screening navigation tree, with a
//! mobile toggle button, a tap-away backdrop, and a session footer with
//! sign-out. Off-canvas when closed on small viewports (pure CSS concern),
//! always visible on large ones.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use vitalboard_types::{route_matches, IconKind, NavItem, NAV_SECTIONS};

use crate::auth::use_auth;
use crate::components::Icon;

/// Sidebar with grouped navigation menu and session footer
#[component]
pub fn Sidebar(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let auth = use_auth();

    view! {
        <>
            // Mobile menu button, hamburger while closed, close glyph while open
            <button
                class="sidebar-toggle"
                on:click=move |_| set_sidebar_open.update(|v| *v = !*v)
                aria-label="Toggle navigation"
                aria-expanded=move || sidebar_open.get().to_string()
            >
                {move || if sidebar_open.get() { "✕" } else { "☰" }}
            </button>

            // Backdrop overlay for mobile, tap to dismiss
            <Show when=move || sidebar_open.get()>
                <div
                    class="sidebar-backdrop"
                    on:click=move |_| set_sidebar_open.set(false)
                ></div>
            </Show>

            <aside class="sidebar" class:sidebar-open=move || sidebar_open.get()>
                <div class="sidebar-brand">
                    <span class="sidebar-brand-mark">
                        <Icon kind=IconKind::HeartPulse size=24 />
                    </span>
                    <div>
                        <h2 class="sidebar-brand-name">"vitalboard"</h2>
                        <p class="sidebar-brand-tagline">"Health Screening"</p>
                    </div>
                </div>

                <nav class="nav">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="nav-section">
                                    <h3 class="nav-section-title">{section.title}</h3>
                                    <ul class="nav-list">
                                        {section
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! { <SidebarLink item set_sidebar_open /> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="sidebar-footer">
                    // Identity block only when signed in; omitted entirely otherwise
                    <Show when=move || auth.user().is_some()>
                        <SidebarUser set_sidebar_open />
                    </Show>

                    <div class="sidebar-meta">
                        <p class="sidebar-meta-product">
                            {concat!("vitalboard v", env!("CARGO_PKG_VERSION"))}
                        </p>
                        <p class="sidebar-meta-disclaimer">
                            "Screening results are informational and not a medical diagnosis."
                        </p>
                    </div>
                </div>
            </aside>
        </>
    }
}

/// Identity block: initial badge, name, email, and the sign-out control
#[component]
fn SidebarUser(set_sidebar_open: WriteSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    // Sign out, then return to the dashboard. Fire-and-forget.
    let sign_out = move |_| {
        auth.logout();
        navigate("/", Default::default());
        set_sidebar_open.set(false);
    };

    view! {
        <div class="sidebar-user">
            <span class="sidebar-user-badge">
                {move || auth.user().map(|u| u.initial().to_string()).unwrap_or_default()}
            </span>
            <div class="sidebar-user-details">
                <span class="sidebar-user-name">
                    {move || auth.user().and_then(|u| u.display_name).unwrap_or_default()}
                </span>
                <span class="sidebar-user-email">
                    {move || auth.user().and_then(|u| u.email).unwrap_or_default()}
                </span>
            </div>
            <button class="sidebar-signout" on:click=sign_out aria-label="Sign out">
                "Sign out"
            </button>
        </div>
    }
}

/// One navigation link; highlights itself when its path segment-matches the
/// current route and closes the panel on selection (mobile auto-dismiss).
#[component]
fn SidebarLink(item: &'static NavItem, set_sidebar_open: WriteSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || route_matches(&pathname.get(), item.path);

    view! {
        <li class="nav-item">
            <A
                href=item.path
                attr:class="sidebar-link"
                attr:title=item.description
                class:active=active
                attr:aria-current=move || if active() { Some("page") } else { None }
                on:click=move |_| set_sidebar_open.set(false)
            >
                <span class="sidebar-link-icon">
                    <Icon kind=item.icon />
                </span>
                <span class="sidebar-link-label">{item.label}</span>
            </A>
        </li>
    }
}
