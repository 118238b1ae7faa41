use dioxus::prelude::*;

use common::{
    catalog::ProjectRecord,
    runtime::StateHandle,
    state::{ModalState, ProjectAction},
};

use crate::site::{
    browser,
    state::{use_site_state, use_view},
};

// the left half of the modal
//
// the playing video only exists while the modal is in OpenVideoPlaying, so closing the
// modal (or switching projects) tears the element down and playback stops with it
fn modal_media(project: &ProjectRecord, modal: ModalState) -> Element {
    let video = project.media.video.clone().unwrap_or_default();

    match (modal, project.media.image.as_deref()) {
        (ModalState::OpenVideoPlaying, _) => rsx! {
            video { src: "{video}", controls: true, autoplay: true }
        },
        (ModalState::OpenVideoPaused, None) => rsx! {
            video { src: "{video}", muted: true, preload: "metadata" }
        },
        (_, Some(image)) => rsx! {
            img { src: "{image}", alt: "{project.title}" }
        },
        (_, None) => rsx! {},
    }
}

#[component]
pub fn ProjectModal() -> Element {
    let state = use_site_state();

    let view = use_view(|s| (s.selected_project().cloned(), s.modal_state()));
    let (project, modal) = view();

    let Some(project) = project else {
        return rsx! {};
    };

    let media = modal_media(&project, modal);

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the backdrop closes the modal
            onclick: move |evt| {
                evt.stop_propagation();
                state.update(|s| s.close_project());
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-media", {media} }

                div { class: "modal-body",
                    span { class: "eyebrow", "{project.category}" }
                    h2 { class: "section-title", "{project.title}" }

                    h4 { class: "form-label", "Goal" }
                    p { "{project.problem}" }

                    h4 { class: "form-label", "Solution" }
                    p { "{project.solution}" }

                    h4 { class: "form-label", "Impact" }
                    ul {
                        for impact in project.impact.iter() {
                            li { "{impact}" }
                        }
                    }

                    div { class: "tech-strip",
                        for tech in project.tech_stack.iter() {
                            span { class: "nav-link", "{tech}" }
                        }
                    }

                    div { class: "modal-buttons",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                if let Some(ProjectAction::OpenExternal(url)) = state
                                    .update(|s| s.primary_action())
                                {
                                    browser::open_external(&url);
                                }
                            },
                            "View Project"
                        }
                        button {
                            class: "btn btn-outline",
                            aria_label: "Source",
                            onclick: move |_| {
                                if let Some(ProjectAction::OpenExternal(url)) = state
                                    .read(|s| s.repo_action())
                                {
                                    browser::open_external(&url);
                                }
                            },
                            "Source"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| state.update(|s| s.close_project()),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
