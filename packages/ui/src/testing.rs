//! Helpers for rendering components in unit tests.

use api::{Kingdom, Profile, Species};
use dioxus::prelude::*;

/// Render a root component to an HTML string.
pub fn render<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(app, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A species with only the required columns set.
pub fn species(id: i64, scientific_name: &str) -> Species {
    Species {
        id,
        scientific_name: scientific_name.to_string(),
        common_name: None,
        kingdom: Kingdom::Animalia,
        description: None,
        total_population: None,
        image: None,
        author: None,
    }
}

pub fn profile(id: &str, display_name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        email: format!("{id}@example.org"),
        display_name: display_name.to_string(),
        biography: None,
    }
}
