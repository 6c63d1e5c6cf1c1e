//! Data models for the application.

mod fetch;
mod listing;
mod profile;
mod species;
mod viewer;

pub use fetch::FetchOutcome;
pub use listing::{ProfilesListing, SpeciesListing};
#[cfg(feature = "server")]
pub use profile::ProfileRow;
pub use profile::Profile;
#[cfg(feature = "server")]
pub use species::SpeciesRow;
pub use species::{Kingdom, Species};
pub use viewer::Viewer;
