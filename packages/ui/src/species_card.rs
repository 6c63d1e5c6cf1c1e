use api::{Species, Viewer};
use dioxus::prelude::*;

use crate::dialog::{DialogEvent, DialogState, ModalOverlay};
use crate::icons::{FaPenToSquare, FaXmark};
use crate::ownership::can_edit;
use crate::summary::truncate_summary;
use crate::Icon;

/// Card for one species row.
///
/// The edit trigger only renders for the row's author. The edit dialog lives
/// outside this crate: `on_edit` receives the row, and without a handler the
/// trigger does nothing.
#[component]
pub fn SpeciesCard(
    species: Species,
    viewer: Viewer,
    on_edit: Option<EventHandler<Species>>,
) -> Element {
    let summary = truncate_summary(species.description.as_deref());
    let editable = can_edit(&viewer.user_id, species.author.as_deref());
    let edit_target = species.clone();

    rsx! {
        div {
            class: "card",
            if let Some(image) = &species.image {
                div {
                    class: "card-image",
                    img { src: "{image}", alt: "{species.scientific_name}" }
                }
            }
            h3 { class: "card-title", "{species.scientific_name}" }
            h4 { class: "card-subtitle", "{species.common_name()}" }
            p { class: "card-summary", "{summary}" }

            LearnMoreDialog { species: species.clone() }

            if editable {
                button {
                    class: "button button-outline card-edit",
                    onclick: move |_| {
                        if let Some(handler) = on_edit {
                            handler.call(edit_target.clone());
                        }
                    },
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    "Edit Species"
                }
            }
        }
    }
}

/// "Learn More" trigger plus the species detail dialog it opens.
#[component]
pub fn LearnMoreDialog(species: Species) -> Element {
    let mut state = use_signal(DialogState::default);

    rsx! {
        button {
            class: "button button-primary card-learn-more",
            onclick: move |_| state.set(state().on(DialogEvent::Trigger)),
            "Learn More"
        }

        if state().is_open() {
            SpeciesDetailDialog {
                species: species.clone(),
                on_close: move |event: DialogEvent| state.set(state().on(event)),
            }
        }
    }
}

/// Open detail dialog: common name as title, then the detail table.
///
/// `on_close` receives which dismissal closed it.
#[component]
pub fn SpeciesDetailDialog(species: Species, on_close: EventHandler<DialogEvent>) -> Element {
    rsx! {
        ModalOverlay {
            class: "modal-card modal-card-wide",
            on_close: move |_| on_close.call(DialogEvent::BackdropClick),
            div {
                class: "modal-header",
                h2 { class: "modal-title", "{species.common_name()}" }
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(DialogEvent::Dismiss),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
            SpeciesDetailTable { species: species.clone() }
        }
    }
}

/// Every detail field of a species, one column each.
#[component]
pub fn SpeciesDetailTable(species: Species) -> Element {
    let description = species.description.clone().unwrap_or_default();

    rsx! {
        table {
            class: "detail-table",
            thead {
                tr {
                    th { "Common Name" }
                    th { "Scientific Name" }
                    th { "Kingdom" }
                    th { "Description" }
                    th { "Population" }
                }
            }
            tbody {
                tr {
                    td { "{species.common_name()}" }
                    td { "{species.scientific_name}" }
                    td { "{species.kingdom}" }
                    td { "{description}" }
                    td { "{species.population_label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::Kingdom;

    use super::*;
    use crate::testing::{render, species};

    #[derive(Props, Clone, PartialEq)]
    struct CardHarness {
        species: Species,
        viewer: Viewer,
    }

    fn card(props: CardHarness) -> Element {
        rsx! {
            SpeciesCard { species: props.species, viewer: props.viewer }
        }
    }

    fn render_card(species: Species, viewer_id: &str) -> String {
        render(card, CardHarness {
            species,
            viewer: Viewer::new(viewer_id),
        })
    }

    #[test]
    fn edit_trigger_only_for_author() {
        let mut row = species(1, "Panthera leo");
        row.author = Some("u1".into());

        assert!(render_card(row.clone(), "u1").contains("Edit Species"));
        assert!(!render_card(row.clone(), "u2").contains("Edit Species"));

        row.author = None;
        assert!(!render_card(row, "u1").contains("Edit Species"));
    }

    fn card_with_edit_handler(props: CardHarness) -> Element {
        rsx! {
            SpeciesCard {
                species: props.species,
                viewer: props.viewer,
                on_edit: move |species: Species| tracing::info!(species_id = species.id, "edit"),
            }
        }
    }

    #[test]
    fn edit_handler_does_not_widen_the_gate() {
        let mut row = species(2, "Canis lupus");
        row.author = Some("u1".into());

        let owner = CardHarness { species: row.clone(), viewer: Viewer::new("u1") };
        assert!(render(card_with_edit_handler, owner).contains("Edit Species"));

        let other = CardHarness { species: row, viewer: Viewer::new("u2") };
        assert!(!render(card_with_edit_handler, other).contains("Edit Species"));
    }

    #[test]
    fn dialog_starts_closed() {
        let html = render_card(species(1, "Panthera leo"), "u1");
        assert!(html.contains("Learn More"));
        assert!(!html.contains("detail-table"));
        assert!(!html.contains("modal-backdrop"));
    }

    #[test]
    fn card_shows_names_and_summary() {
        let mut row = species(3, "Quercus robur");
        row.common_name = Some("English oak".into());
        row.description = Some("x".repeat(200));
        row.image = Some("https://img.example.org/oak.jpg".into());

        let html = render_card(row, "u1");
        assert!(html.contains("Quercus robur"));
        assert!(html.contains("English oak"));
        assert!(html.contains(&format!("{}...", "x".repeat(150))));
        assert!(!html.contains(&"x".repeat(151)));
        assert!(html.contains(r#"src="https://img.example.org/oak.jpg""#));
    }

    #[test]
    fn card_without_image_renders_no_img() {
        let html = render_card(species(4, "Amanita muscaria"), "u1");
        assert!(!html.contains("<img"));
    }

    #[derive(Props, Clone, PartialEq)]
    struct TableHarness {
        species: Species,
    }

    fn table(props: TableHarness) -> Element {
        rsx! {
            SpeciesDetailTable { species: props.species }
        }
    }

    #[test]
    fn detail_table_shows_fields_verbatim() {
        let mut row = species(5, "Escherichia coli");
        row.common_name = Some("E. coli".into());
        row.kingdom = Kingdom::Bacteria;
        row.description = Some("Rod-shaped bacterium".into());
        row.total_population = Some(42);

        let html = render(table, TableHarness { species: row });
        for field in ["E. coli", "Escherichia coli", "Bacteria", "Rod-shaped bacterium", "42"] {
            assert!(html.contains(&format!("<td>{field}</td>")), "missing {field} in {html}");
        }
    }

    #[derive(Props, Clone, PartialEq)]
    struct DialogHarness {
        species: Species,
    }

    fn open_dialog(props: DialogHarness) -> Element {
        rsx! {
            SpeciesDetailDialog { species: props.species, on_close: move |_| {} }
        }
    }

    #[test]
    fn open_dialog_shows_title_and_details() {
        let mut row = species(7, "Ailuropoda melanoleuca");
        row.common_name = Some("Giant panda".into());
        row.kingdom = Kingdom::Animalia;
        row.description = Some("Bamboo-eating bear".into());
        row.total_population = Some(1864);

        let html = render(open_dialog, DialogHarness { species: row });

        assert!(html.contains("modal-backdrop"));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"<h2 class="modal-title">Giant panda</h2>"#), "{html}");
        for field in [
            "Giant panda",
            "Ailuropoda melanoleuca",
            "Animalia",
            "Bamboo-eating bear",
            "1864",
        ] {
            assert!(html.contains(&format!("<td>{field}</td>")), "missing {field} in {html}");
        }
    }

    #[test]
    fn detail_table_leaves_absent_values_empty() {
        let html = render(table, TableHarness { species: species(6, "Physarum polycephalum") });
        assert_eq!(html.matches("<td></td>").count(), 3);
    }
}
