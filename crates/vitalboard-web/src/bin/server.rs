//! Development server for the vitalboard session API

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitalboard_types::CurrentUser;
use vitalboard_web::SessionStore;

fn port_from_env() -> u16 {
    std::env::var("VITALBOARD_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3400)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Demo session so the sidebar footer has an identity to show
    let store = Arc::new(SessionStore::signed_in(CurrentUser {
        display_name: Some("Demo User".to_string()),
        email: Some("demo@vitalboard.local".to_string()),
    }));

    vitalboard_web::run(store, port_from_env()).await
}
