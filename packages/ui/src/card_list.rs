//! Card grids. One card per row, keyed by row id, in the order given.

use api::{Profile, Species, Viewer};
use dioxus::prelude::*;

use crate::{ProfileCard, SpeciesCard};

#[component]
pub fn SpeciesGrid(
    species: Vec<Species>,
    viewer: Viewer,
    on_edit: Option<EventHandler<Species>>,
) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for row in species {
                SpeciesCard {
                    key: "{row.id}",
                    species: row.clone(),
                    viewer: viewer.clone(),
                    on_edit,
                }
            }
        }
    }
}

#[component]
pub fn ProfileGrid(profiles: Vec<Profile>) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for row in profiles {
                ProfileCard { key: "{row.id}", profile: row.clone() }
            }
        }
    }
}
