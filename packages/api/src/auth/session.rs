//! Session resolution from the cookie-backed session store.

use tower_sessions::session::Error;
use tower_sessions::Session;

use crate::models::Viewer;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for storing the signed-in email in session.
pub const SESSION_EMAIL_KEY: &str = "email";

/// Resolve the viewer for this request.
///
/// `Ok(None)` means nobody is signed in; callers redirect to `/` and must not
/// touch any collection.
pub async fn resolve_viewer(session: &Session) -> Result<Option<Viewer>, Error> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    let email: Option<String> = session.get(SESSION_EMAIL_KEY).await?;

    Ok(Some(Viewer { user_id, email }))
}

/// Bind the session to a freshly signed-in viewer.
pub async fn remember_viewer(session: &Session, viewer: &Viewer) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, &viewer.user_id).await?;
    if let Some(email) = &viewer.email {
        session.insert(SESSION_EMAIL_KEY, email).await?;
    }
    Ok(())
}

/// Drop every session value and the cookie.
pub async fn forget_viewer(session: &Session) -> Result<(), Error> {
    session.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_no_session_resolves_to_none() {
        assert_eq!(resolve_viewer(&session()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remembered_viewer_resolves() {
        let session = session();
        let viewer = Viewer {
            user_id: "u1".into(),
            email: Some("ada@example.org".into()),
        };
        remember_viewer(&session, &viewer).await.unwrap();

        assert_eq!(resolve_viewer(&session).await.unwrap(), Some(viewer));
    }

    #[tokio::test]
    async fn test_empty_user_id_is_no_session() {
        let session = session();
        session.insert(SESSION_USER_ID_KEY, "").await.unwrap();

        assert_eq!(resolve_viewer(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_forget_clears_viewer() {
        let session = session();
        remember_viewer(&session, &Viewer::new("u1")).await.unwrap();
        forget_viewer(&session).await.unwrap();

        assert_eq!(resolve_viewer(&session).await.unwrap(), None);
    }
}
