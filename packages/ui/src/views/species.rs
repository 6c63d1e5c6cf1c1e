use api::{Species, SpeciesListing};
use dioxus::prelude::*;

use crate::{ProfileGrid, SpeciesGrid};

/// Species page body: the species grid, then every profile.
///
/// A failed read renders as an empty grid.
#[component]
pub fn SpeciesView(listing: SpeciesListing, on_edit: Option<EventHandler<Species>>) -> Element {
    let species = listing.species.rows().to_vec();
    let profiles = listing.profiles.rows().to_vec();

    rsx! {
        div {
            class: "page-header",
            h2 { class: "page-title", "Species List" }
        }
        hr { class: "separator" }
        SpeciesGrid { species, viewer: listing.viewer.clone(), on_edit }
        ProfileGrid { profiles }
    }
}
