use api::ProfilesListing;
use dioxus::prelude::*;

use crate::ProfileGrid;

/// Profiles page body.
#[component]
pub fn ProfilesView(listing: ProfilesListing) -> Element {
    let profiles = listing.profiles.rows().to_vec();

    rsx! {
        div {
            class: "page-header",
            h2 { class: "page-title", "Profiles" }
        }
        hr { class: "separator" }
        ProfileGrid { profiles }
    }
}
