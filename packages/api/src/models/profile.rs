//! # Profile model
//!
//! A row of the `profiles` table. [`ProfileRow`] (server only) is decoded
//! straight from Postgres; [`Profile`] is the client-safe projection that
//! crosses the server/client boundary, with the `uuid` key rendered as a string.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub biography: Option<String>,
}

#[cfg(feature = "server")]
impl ProfileRow {
    /// Convert to Profile for client consumption.
    pub fn to_info(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            biography: self.biography.clone(),
        }
    }
}

/// Profile information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub biography: Option<String>,
}
