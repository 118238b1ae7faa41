use dioxus::prelude::*;

use common::state::Section;

use crate::{components::project_card::ProjectCard, site::state::use_site};

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    linkedin: Option<String>,
    github: Option<String>,
}

#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    rsx! {
        div { class: "social-links",
            if let Some(url) = props.linkedin {
                a {
                    class: "nav-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "LinkedIn"
                }
            }
            if let Some(url) = props.github {
                a {
                    class: "nav-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub"
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let owner = &site.config.owner;

    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            div { class: "container",
                div { class: "hero-badge",
                    span { class: "pulse" }
                    "Available for high-impact projects"
                }
                h1 { class: "hero-title",
                    "Building the next "
                    br {}
                    span { "billion users." }
                }
                p { class: "hero-bio", "{owner.bio}" }
                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: Section::Work.href(), "Explore Work" }
                    SocialLinks {
                        linkedin: owner.linkedin_url.clone(),
                        github: owner.github_url.clone(),
                    }
                }
            }
        }
    }
}

#[component]
pub fn Work() -> Element {
    let site = use_site();

    rsx! {
        section { id: Section::Work.anchor(), class: "section",
            div { class: "container",
                h2 { class: "section-title", "Select Works" }
                p { "A curation of systems built for microfinance, logistics, and digital accessibility." }
                div { class: "project-grid",
                    for project in site.catalog.projects().iter() {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let site = use_site();

    rsx! {
        section { id: Section::Skills.anchor(), class: "section",
            div { class: "container",
                h2 { class: "section-title", "Core Stack" }
                div { class: "skill-grid",
                    for skill in site.catalog.skills().iter() {
                        div { key: "{skill.name}", class: "bento-card skill-card",
                            div { class: "skill-icon", "{skill.icon.symbol()}" }
                            h3 { "{skill.name}" }
                            p { "{skill.description}" }
                        }
                    }
                }
                TechStack {}
            }
        }
    }
}

#[component]
fn TechStack() -> Element {
    let site = use_site();

    rsx! {
        div { class: "tech-strip",
            for tech in site.catalog.tech().iter() {
                div { key: "{tech.name}", class: "tech-item", title: "{tech.name}",
                    img { src: "{tech.icon_url}", alt: "{tech.name}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Section::About.anchor(), class: "section about",
            div { class: "container",
                h2 { class: "section-title", "The Philosophy" }
                p { class: "quote",
                    "“I build for the real world. Tech shouldn't just be pretty, it needs to work in low-bandwidth, high-demand African markets.”"
                }
                div { class: "pillars",
                    div {
                        h4 { class: "eyebrow", "Efficiency" }
                        p { "Optimized ML models that run on edge devices without needing a supercomputer." }
                    }
                    div {
                        h4 { class: "eyebrow", "Localization" }
                        p { "Deep focus on local context, languages, and user behavior patterns." }
                    }
                    div {
                        h4 { class: "eyebrow", "Scalability" }
                        p { "Architecture designed to handle the next 10 million users with zero friction." }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let owner = &site.config.owner;

    rsx! {
        footer { class: "footer",
            p { "{owner.name} / {owner.year} Portfolio" }
        }
    }
}
