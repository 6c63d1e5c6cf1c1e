//! # Species model
//!
//! ## [`SpeciesRow`] (server only)
//!
//! The complete database row from the `species` table, loaded with
//! [`sqlx::FromRow`]:
//!
//! - `id` — `bigint` primary key, the list ordering key.
//! - `scientific_name`, `common_name` — the names shown on the card.
//! - `kingdom` — the Postgres `kingdom` enum, decoded into [`Kingdom`].
//! - `description`, `total_population`, `image` — optional detail fields.
//! - `author` — the `uuid` of the user who created the row.
//!
//! ## [`Species`]
//!
//! The client-safe projection. The author `Uuid` becomes a `String` so it can be
//! compared against [`Viewer::user_id`](super::Viewer) in WASM builds.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Biological kingdom, stored as the Postgres enum `kingdom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(feature = "server", sqlx(type_name = "kingdom"))]
pub enum Kingdom {
    Animalia,
    Plantae,
    Fungi,
    Protista,
    Archaea,
    Bacteria,
}

impl Kingdom {
    pub fn as_str(self) -> &'static str {
        match self {
            Kingdom::Animalia => "Animalia",
            Kingdom::Plantae => "Plantae",
            Kingdom::Fungi => "Fungi",
            Kingdom::Protista => "Protista",
            Kingdom::Archaea => "Archaea",
            Kingdom::Bacteria => "Bacteria",
        }
    }
}

impl fmt::Display for Kingdom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full species record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SpeciesRow {
    pub id: i64,
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub kingdom: Kingdom,
    pub description: Option<String>,
    pub total_population: Option<i64>,
    pub image: Option<String>,
    pub author: Option<Uuid>,
}

#[cfg(feature = "server")]
impl SpeciesRow {
    /// Convert to Species for client consumption.
    pub fn to_info(&self) -> Species {
        Species {
            id: self.id,
            scientific_name: self.scientific_name.clone(),
            common_name: self.common_name.clone(),
            kingdom: self.kingdom,
            description: self.description.clone(),
            total_population: self.total_population,
            image: self.image.clone(),
            author: self.author.map(|id| id.to_string()),
        }
    }
}

/// Species information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Species {
    pub id: i64,
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub kingdom: Kingdom,
    pub description: Option<String>,
    pub total_population: Option<i64>,
    pub image: Option<String>,
    pub author: Option<String>,
}

impl Species {
    /// Common name, or an empty string when the row has none.
    pub fn common_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or_default()
    }

    /// Population rendered for display; empty when unknown.
    pub fn population_label(&self) -> String {
        self.total_population
            .map(|n| n.to_string())
            .unwrap_or_default()
    }
}
