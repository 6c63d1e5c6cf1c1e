use api::Profile;
use dioxus::prelude::*;

use crate::summary::truncate_summary;

/// Card for one profile row.
#[component]
pub fn ProfileCard(profile: Profile) -> Element {
    let biography = truncate_summary(profile.biography.as_deref());

    rsx! {
        div {
            class: "card",
            h3 { class: "card-title", "{profile.display_name}" }
            p { class: "card-summary", "{biography}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{profile, render};

    #[derive(Props, Clone, PartialEq)]
    struct Harness {
        profile: Profile,
    }

    fn card(props: Harness) -> Element {
        rsx! {
            ProfileCard { profile: props.profile }
        }
    }

    #[test]
    fn shows_name_and_truncated_biography() {
        let mut row = profile("p1", "Ada Lovelace");
        row.biography = Some("Wrote the first program.".into());

        let html = render(card, Harness { profile: row });
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Wrote the first program...."));
    }

    #[test]
    fn missing_biography_is_blank() {
        let html = render(card, Harness { profile: profile("p2", "Grace Hopper") });
        assert!(html.contains(r#"<p class="card-summary"></p>"#));
    }
}
