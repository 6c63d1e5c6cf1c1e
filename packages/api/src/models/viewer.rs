//! The signed-in viewer of a page.

use serde::{Deserialize, Serialize};

/// Identity of the authenticated viewer for the current request.
///
/// Resolved once per request from the cookie session and handed explicitly to
/// every view that needs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Viewer {
    /// Opaque user identifier issued by the auth provider.
    pub user_id: String,
    pub email: Option<String>,
}

impl Viewer {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    /// Get display label, falling back to the user id if no email is known.
    pub fn label(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_email() {
        let mut viewer = Viewer::new("u1");
        assert_eq!(viewer.label(), "u1");

        viewer.email = Some("ada@example.org".to_string());
        assert_eq!(viewer.label(), "ada@example.org");
    }
}
