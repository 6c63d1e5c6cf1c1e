//! Modal dialog state and overlay.

use dioxus::prelude::*;

/// Open/closed state of a card-local dialog. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move a dialog between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The user pressed the dialog's trigger.
    Trigger,
    /// The user pressed the close button.
    Dismiss,
    /// The user clicked the backdrop around the dialog.
    BackdropClick,
}

impl DialogState {
    pub fn on(self, event: DialogEvent) -> Self {
        match event {
            DialogEvent::Trigger => DialogState::Open,
            DialogEvent::Dismiss | DialogEvent::BackdropClick => DialogState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DialogState::Open
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "modal-card".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            role: "presentation",
            onclick: move |_| on_close.call(()),
            div {
                class: "{class}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
