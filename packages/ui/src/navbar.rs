use api::Viewer;
use dioxus::prelude::*;

use crate::SignOutButton;

/// Top bar for signed-in pages. `children` are the page links.
#[component]
pub fn Navbar(viewer: Viewer, on_signed_out: EventHandler<()>, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Biodex" }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-viewer",
                span { class: "navbar-viewer-label", "{viewer.label()}" }
                SignOutButton { on_signed_out }
            }
        }
    }
}
