use dioxus::prelude::*;

use common::{runtime::StateHandle, state::ToastKind};

use crate::site::state::{use_site_state, use_view};

#[component]
pub fn ToastBox() -> Element {
    let state = use_site_state();

    let toast = use_view(|s| s.active_toast().cloned());

    let Some(toast) = toast() else {
        return rsx! {};
    };

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast glass toast-success", "✓"),
        ToastKind::Error => ("toast glass toast-error", "!"),
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "toast-icon", "{icon}" }
            span { "{toast.message}" }
            button {
                class: "btn-icon",
                aria_label: "Dismiss",
                onclick: move |_| state.update(|s| s.dismiss_toast()),
                "✕"
            }
        }
    }
}
