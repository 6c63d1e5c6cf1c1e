use dioxus::prelude::*;
use ui::views::SignInView;

use crate::Route;

/// Entry route: sign in, then continue to the species list.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_signed_in: move |_| {
                nav.replace(Route::Species {});
            },
        }
    }
}
