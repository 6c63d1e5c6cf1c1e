//! Sign-in and sign-out controls.

use api::Viewer;
use dioxus::prelude::*;

/// Email + password form backed by the `sign_in` server function.
#[component]
pub fn SignInForm(on_signed_in: EventHandler<Viewer>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error.set(None);
        match api::sign_in(email(), password()).await {
            Ok(viewer) => on_signed_in.call(viewer),
            Err(e) => {
                tracing::warn!("Sign-in failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        form {
            class: "sign-in-form",
            onsubmit,
            label { r#for: "sign-in-email", "Email" }
            input {
                id: "sign-in-email",
                r#type: "email",
                autocomplete: "email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { r#for: "sign-in-password", "Password" }
            input {
                id: "sign-in-password",
                r#type: "password",
                autocomplete: "current-password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "button button-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() {
                    "Signing in..."
                } else {
                    "Sign In"
                }
            }
        }
    }
}

/// Button to sign out the current viewer.
#[component]
pub fn SignOutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "Sign Out".to_string())] label: String,
) -> Element {
    let onclick = move |_| async move {
        match api::sign_out().await {
            Ok(()) => on_signed_out.call(()),
            Err(e) => tracing::error!("Sign-out failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "button button-outline",
            onclick,
            "{label}"
        }
    }
}
