use dioxus::prelude::*;
use ui::views::SpeciesView;

use super::{unavailable, PageNavbar};

#[component]
pub fn Species() -> Element {
    let nav = use_navigator();
    let listing = use_server_future(api::list_species)?;

    let page = match &*listing.read() {
        Some(Ok(listing)) => rsx! {
            PageNavbar { viewer: listing.viewer.clone() }
            main {
                class: "page",
                SpeciesView {
                    listing: listing.clone(),
                    on_edit: move |species: api::Species| {
                        tracing::info!(species_id = species.id, "Edit requested");
                    },
                }
            }
        },
        Some(Err(e)) => unavailable(nav, "Species", e),
        None => rsx! {},
    };
    page
}
