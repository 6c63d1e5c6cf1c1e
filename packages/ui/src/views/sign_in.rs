use api::Viewer;
use dioxus::prelude::*;

use crate::SignInForm;

/// Entry page: brand, blurb and the sign-in form.
#[component]
pub fn SignInView(on_signed_in: EventHandler<Viewer>) -> Element {
    rsx! {
        div {
            class: "sign-in-page",
            h1 { class: "sign-in-title", "Biodex" }
            p { class: "sign-in-blurb", "Sign in to browse species and the people cataloguing them." }
            SignInForm { on_signed_in }
        }
    }
}
