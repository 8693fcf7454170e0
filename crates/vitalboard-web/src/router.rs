//! Web router using Axum

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use vitalboard_types::{ColorScheme, CurrentUser, Theme};

use crate::session::SessionStore;
use crate::style::APP_CSS;

/// Create the web router
pub fn create_router(store: Arc<SessionStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/session", get(session_handler))
        .route("/api/logout", post(logout_handler))
        .layer(cors)
        .with_state(store)
}

async fn index_handler() -> Html<String> {
    let theme_vars = Theme::for_scheme(ColorScheme::Dark).css_variables(":root");

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>vitalboard - Health Screening</title>
    <style>
{theme_vars}
{APP_CSS}
    </style>
</head>
<body>
    <div class="empty-state">
        <h2 class="empty-state-title">vitalboard - Build Required</h2>
        <p>The Leptos WASM frontend needs to be compiled before the UI can be displayed.</p>
        <p>Install Trunk (<code>cargo install trunk</code>), add the
        <code>wasm32-unknown-unknown</code> target, then run
        <code>trunk build --release</code> in <code>crates/vitalboard-web</code>
        and restart the server.</p>
        <p><a href="/api/health">/api/health</a> and
        <a href="/api/session">/api/session</a> are available now.</p>
    </div>
</body>
</html>"#
    ))
}

async fn health_handler(State(store): State<Arc<SessionStore>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "signedIn": store.current().is_some(),
    }))
}

/// Current session user, or JSON null when nobody is signed in
async fn session_handler(State(store): State<Arc<SessionStore>>) -> Json<Option<CurrentUser>> {
    Json(store.current())
}

async fn logout_handler(State(store): State<Arc<SessionStore>>) -> StatusCode {
    store.sign_out();
    tracing::info!("session terminated");
    StatusCode::NO_CONTENT
}
