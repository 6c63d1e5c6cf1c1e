use dioxus::prelude::*;
use ui::views::ProfilesView;

use super::{unavailable, PageNavbar};

#[component]
pub fn Profiles() -> Element {
    let nav = use_navigator();
    let listing = use_server_future(api::list_profiles)?;

    let page = match &*listing.read() {
        Some(Ok(listing)) => rsx! {
            PageNavbar { viewer: listing.viewer.clone() }
            main {
                class: "page",
                ProfilesView { listing: listing.clone() }
            }
        },
        Some(Err(e)) => unavailable(nav, "Profiles", e),
        None => rsx! {},
    };
    page
}
