//! vitalboard-web - Web frontend for vitalboard using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod session;
pub mod style;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;
#[cfg(feature = "ssr")]
pub use session::SessionStore;

#[cfg(feature = "ssr")]
pub async fn run(store: std::sync::Arc<SessionStore>, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router(store);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
