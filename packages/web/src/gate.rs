//! Session gate for the page routes.
//!
//! Protected pages are only rendered for a signed-in viewer. Everyone else gets
//! `303 See Other` to the entry route before the page, and therefore any data
//! read, runs. A signed-in viewer hitting the entry route goes straight to the
//! species list.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

/// Where visitors without a session land.
pub const ENTRY_ROUTE: &str = "/";

/// Where signed-in viewers land.
pub const HOME_ROUTE: &str = "/species";

/// Page routes that need a session.
pub const PROTECTED_ROUTES: &[&str] = &["/species", "/profiles"];

pub fn is_protected(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|route| {
        path.strip_prefix(route)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

pub async fn require_session(session: Session, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let protected = is_protected(path);
    let entry = path == ENTRY_ROUTE;
    if !protected && !entry {
        return next.run(request).await;
    }

    let signed_in = match api::auth::resolve_viewer(&session).await {
        Ok(viewer) => viewer.is_some(),
        Err(e) => {
            tracing::warn!("Failed to read session: {}", e);
            false
        }
    };

    match (signed_in, protected) {
        (false, true) => Redirect::to(ENTRY_ROUTE).into_response(),
        (true, false) => Redirect::to(HOME_ROUTE).into_response(),
        _ => next.run(request).await,
    }
}
