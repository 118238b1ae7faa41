use dioxus::prelude::*;

use common::{catalog::ProjectRecord, runtime::StateHandle};

use crate::site::state::use_site_state;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: ProjectRecord,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let state = use_site_state();

    let project = props.project;
    let id = project.id.clone();

    // footage loops silently in the card; the modal is where it plays with sound
    let preview = match (&project.media.video, project.media.poster()) {
        (Some(video), _) => rsx! {
            video {
                src: "{video}",
                autoplay: true,
                muted: true,
                r#loop: true,
            }
        },
        (None, Some(image)) => rsx! {
            img { src: "{image}", alt: "{project.title}" }
        },
        (None, None) => rsx! {},
    };

    rsx! {
        div {
            class: "bento-card project-card",
            onclick: move |_| state.update(|s| s.select_project(&id)),
            div { class: "project-preview", {preview} }
            div { class: "project-info",
                span { class: "eyebrow", "{project.category}" }
                h3 { "{project.title}" }
                p { "{project.problem}" }
                span { class: "nav-link", "View Case Study ›" }
            }
        }
    }
}
