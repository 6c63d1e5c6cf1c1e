//! Authentication: cookie-session resolution and the hosted auth API.

#[cfg(feature = "server")]
mod session;
#[cfg(feature = "server")]
mod supabase;

#[cfg(feature = "server")]
pub use session::{forget_viewer, remember_viewer, resolve_viewer, SESSION_EMAIL_KEY, SESSION_USER_ID_KEY};
#[cfg(feature = "server")]
pub use supabase::{AuthError, AuthUser, SupabaseAuth};
