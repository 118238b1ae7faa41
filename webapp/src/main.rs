#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

use common::{
    runtime::StateHandle,
    state::{Theme, ViewState},
};

mod site;
use site::{
    browser::{self, SCROLL_LISTENER},
    state::{Site, SiteState},
    style::SITE_STYLES,
    transport::SiteTransport,
};

mod components;
use components::{
    modal::ProjectModal,
    navigation::{NavBar, ScrollProgress},
    toast::ToastBox,
};

mod home;
use home::{About, Footer, Hero, Skills, Work};

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the content is compiled in, so this only fails if a bad edit slipped past pf-check
    let site = use_hook(|| {
        Site::embedded().map_err(|err| {
            error!("failed to load site content: {err}");
            err.to_string()
        })
    });

    rsx! {
        style { "{SITE_STYLES}" }
        match site {
            Ok(site) => rsx! {
                Portfolio { site }
            },
            Err(err) => rsx! {
                div { class: "container",
                    p { class: "form-error", "{err}" }
                }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    site: Site,
}

// Portfolio
//
// owns the view state and hands it, the content, and the contact transport down
// through the context.  it never reads the view state itself; the components below read
// it through use_view memos, so a scroll only re-renders the ones whose derived values
// changed
#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    let site = use_context_provider(|| props.site.clone());

    let state = use_context_provider(|| {
        SiteState::new(
            ViewState::new(site.catalog.clone())
                .with_condense_threshold(site.config.nav.condense_threshold_px),
        )
    });

    use_context_provider(|| SiteTransport::from_config(&site.config));

    use_hook(|| browser::apply_theme(Theme::default()));

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);

        loop {
            match listener.recv::<(f64, f64)>().await {
                Ok((offset, scrollable)) => state.update(|s| s.on_scroll(offset, scrollable)),
                Err(err) => {
                    error!("scroll listener stopped: {err:?}");
                    break;
                }
            }
        }
    });

    rsx! {
        ScrollProgress {}
        NavBar {}
        main {
            Hero {}
            Work {}
            Skills {}
            About {}
            Contact {}
            Footer {}
        }
        ProjectModal {}
        ToastBox {}
    }
}
