//! Payloads returned by the page server functions.

use serde::{Deserialize, Serialize};

use super::{FetchOutcome, Profile, Species, Viewer};

/// Everything the species page renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesListing {
    pub viewer: Viewer,
    pub species: FetchOutcome<Species>,
    pub profiles: FetchOutcome<Profile>,
}

/// Everything the profiles page renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilesListing {
    pub viewer: Viewer,
    pub profiles: FetchOutcome<Profile>,
}
