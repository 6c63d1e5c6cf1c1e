//! This crate contains all shared UI for the workspace.
//!
//! Views never look the viewer up from context: pages resolve it through the
//! `api` server functions and pass it down as a prop.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod dialog;
pub use dialog::{DialogEvent, DialogState, ModalOverlay};

pub mod ownership;
pub use ownership::can_edit;

pub mod summary;
pub use summary::{truncate_summary, SUMMARY_LIMIT};

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{SignInForm, SignOutButton};

mod species_card;
pub use species_card::{LearnMoreDialog, SpeciesCard, SpeciesDetailDialog, SpeciesDetailTable};

mod profile_card;
pub use profile_card::ProfileCard;

mod card_list;
pub use card_list::{ProfileGrid, SpeciesGrid};

#[cfg(test)]
mod testing;
