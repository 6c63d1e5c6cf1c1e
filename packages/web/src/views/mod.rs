use api::Viewer;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::Navbar;

use crate::Route;

mod home;
pub use home::Home;

mod profiles;
pub use profiles::Profiles;

mod species;
pub use species::Species;

/// Navbar with the page links; signing out returns to the entry route.
#[component]
fn PageNavbar(viewer: Viewer) -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            viewer,
            on_signed_out: move |_| {
                nav.replace(Route::Home {});
            },
            Link { to: Route::Species {}, "Species" }
            Link { to: Route::Profiles {}, "Profiles" }
        }
    }
}

/// Page data could not be loaded. Without a session, go back to sign in.
fn unavailable(nav: Navigator, page: &str, error: &ServerFnError) -> Element {
    tracing::warn!("{} page unavailable: {}", page, error);
    if error.to_string().contains(api::NOT_SIGNED_IN) {
        nav.replace(Route::Home {});
    }
    rsx! {}
}
