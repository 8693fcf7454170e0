//! API client utilities for the frontend

use gloo_net::http::Request;
use vitalboard_types::CurrentUser;

/// Fetch the current session user; `None` means not signed in.
pub async fn fetch_session() -> Result<Option<CurrentUser>, gloo_net::Error> {
    Request::get("/api/session")
        .send()
        .await?
        .json::<Option<CurrentUser>>()
        .await
}

/// Terminate the backend session. Callers treat this as fire-and-forget.
pub async fn post_logout() -> Result<(), gloo_net::Error> {
    Request::post("/api/logout").send().await?;
    Ok(())
}
