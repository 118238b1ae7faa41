use dioxus::prelude::*;

use common::{runtime::StateHandle, state::Section};

use crate::site::state::{use_site, use_site_state, use_view};

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    section: Section,
    class: String,
    #[props(default)]
    label: Option<String>,
}

// every link closes the mobile menu on the way to its section
#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let state = use_site_state();

    let section = props.section;
    let label = props
        .label
        .unwrap_or_else(|| section.label().to_owned());

    rsx! {
        a {
            class: "{props.class}",
            href: section.href(),
            onclick: move |_| state.update(|s| s.navigate(section)),
            "{label}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let state = use_site_state();
    let site = use_site();

    let view = use_view(|s| (s.nav_condensed(), s.mobile_menu_open(), s.theme()));
    let (condensed, menu_open, theme) = view();

    let theme_icon = if theme.is_dark() { "☀" } else { "☾" };
    let initials = site.config.owner.initials.clone();

    rsx! {
        nav { class: if condensed { "navbar condensed" } else { "navbar" },
            div { class: "container",
                div { class: "nav-inner",
                    a {
                        class: "logo",
                        href: Section::Home.href(),
                        onclick: move |_| state.update(|s| s.navigate(Section::Home)),
                        "{initials} "
                        span { "/" }
                    }

                    div { class: "nav-links",
                        for section in Section::NAV {
                            NavBarLink {
                                key: "{section.anchor()}",
                                section,
                                class: "nav-link".to_owned(),
                            }
                        }
                        button {
                            class: "btn-icon",
                            aria_label: "Toggle Theme",
                            onclick: move |_| state.toggle_theme(),
                            "{theme_icon}"
                        }
                        NavBarLink {
                            section: Section::Contact,
                            class: "btn btn-primary".to_owned(),
                            label: "Hiring?".to_owned(),
                        }
                    }

                    div { class: "nav-mobile-toggles",
                        button {
                            class: "btn-icon",
                            aria_label: "Toggle Theme",
                            onclick: move |_| state.toggle_theme(),
                            "{theme_icon}"
                        }
                        button {
                            class: "btn-icon",
                            aria_label: "Toggle Menu",
                            onclick: move |_| state.update(|s| s.toggle_mobile_menu()),
                            if menu_open {
                                "✕"
                            } else {
                                "☰"
                            }
                        }
                    }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for section in Section::NAV {
                        NavBarLink {
                            key: "{section.anchor()}",
                            section,
                            class: "nav-link".to_owned(),
                        }
                    }
                    NavBarLink {
                        section: Section::Contact,
                        class: "btn btn-primary".to_owned(),
                        label: "Contact Me".to_owned(),
                    }
                }
            }
        }
    }
}

// thin bar across the top tracking how far down the page we are
#[component]
pub fn ScrollProgress() -> Element {
    let progress = use_view(|s| s.scroll_progress());

    rsx! {
        div {
            class: "scroll-progress",
            style: "transform: scaleX({progress()});",
        }
    }
}
