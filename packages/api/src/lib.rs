//! # API crate — shared fullstack server functions for Biodex
//!
//! Defines every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Cookie-session resolution, password sign-in against the hosted auth API |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and collection reads |
//! | [`models`] | — | `Species`, `Profile`, `Viewer`, `FetchOutcome` and the page payloads |
//! | [`settings`] | `server` | Layered runtime configuration |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with full server logic (behind `#[cfg(feature = "server")]`) and
//! once as a thin client stub that forwards the call over HTTP.
//!
//! - **Session**: `get_viewer`, `sign_in`, `sign_out`
//! - **Pages**: `list_species`, `list_profiles`
//!
//! The page functions resolve the session first and refuse without touching the
//! database when nobody is signed in.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{
    FetchOutcome, Kingdom, Profile, ProfilesListing, Species, SpeciesListing, Viewer,
};

/// Error text for page data requested without a session.
pub const NOT_SIGNED_IN: &str = "Not signed in";

/// Resolve the viewer or fail before any data access.
#[cfg(feature = "server")]
async fn require_viewer(session: &tower_sessions::Session) -> Result<Viewer, ServerFnError> {
    auth::resolve_viewer(session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .ok_or_else(|| ServerFnError::new(NOT_SIGNED_IN))
}

/// Get the signed-in viewer from the session.
#[cfg(feature = "server")]
#[get("/api/auth/viewer", session: tower_sessions::Session)]
pub async fn get_viewer() -> Result<Option<Viewer>, ServerFnError> {
    auth::resolve_viewer(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/viewer")]
pub async fn get_viewer() -> Result<Option<Viewer>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<Viewer, ServerFnError> {
    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.is_empty() {
        return Err(ServerFnError::new("Password is required"));
    }

    let client = auth::SupabaseAuth::from_settings().map_err(|e| {
        tracing::error!("Auth client misconfigured: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    let viewer = match client.sign_in_with_password(&email, &password).await {
        Ok(user) => user.into_viewer(),
        Err(auth::AuthError::Rejected(reason)) => return Err(ServerFnError::new(reason)),
        Err(e) => {
            tracing::error!("Sign-in request failed: {}", e);
            return Err(ServerFnError::new(e.to_string()));
        }
    };

    auth::remember_viewer(&session, &viewer)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %viewer.user_id, "Viewer signed in");
    Ok(viewer)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<Viewer, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current viewer by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    auth::forget_viewer(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Species page data: every species, then every profile, newest first.
#[cfg(feature = "server")]
#[get("/api/species", session: tower_sessions::Session)]
pub async fn list_species() -> Result<SpeciesListing, ServerFnError> {
    use crate::models::{ProfileRow, SpeciesRow};

    let viewer = require_viewer(&session).await?;

    let species = db::fetch_all::<SpeciesRow>().await;
    let profiles = db::fetch_all::<ProfileRow>().await;

    Ok(SpeciesListing {
        viewer,
        species,
        profiles,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/species")]
pub async fn list_species() -> Result<SpeciesListing, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Profiles page data, newest first.
#[cfg(feature = "server")]
#[get("/api/profiles", session: tower_sessions::Session)]
pub async fn list_profiles() -> Result<ProfilesListing, ServerFnError> {
    use crate::models::ProfileRow;

    let viewer = require_viewer(&session).await?;
    let profiles = db::fetch_all::<ProfileRow>().await;

    Ok(ProfilesListing { viewer, profiles })
}

#[cfg(not(feature = "server"))]
#[get("/api/profiles")]
pub async fn list_profiles() -> Result<ProfilesListing, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_page_data_refused_without_session() {
        let err = require_viewer(&session()).await.unwrap_err();
        assert!(err.to_string().contains(NOT_SIGNED_IN), "{err}");
    }

    #[tokio::test]
    async fn test_page_data_refused_for_empty_user_id() {
        let session = session();
        session
            .insert(auth::SESSION_USER_ID_KEY, "")
            .await
            .unwrap();

        let err = require_viewer(&session).await.unwrap_err();
        assert!(err.to_string().contains(NOT_SIGNED_IN), "{err}");
    }

    #[tokio::test]
    async fn test_page_data_allowed_after_sign_in() {
        let session = session();
        auth::remember_viewer(&session, &Viewer::new("u1")).await.unwrap();

        let viewer = require_viewer(&session).await.unwrap();
        assert_eq!(viewer.user_id, "u1");
    }
}
