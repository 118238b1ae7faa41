use std::sync::Arc;

use dioxus::prelude::*;

use common::{
    catalog::Catalog,
    config::SiteConfig,
    runtime::StateHandle,
    state::ViewState,
};

use crate::site::browser;

// what the site was built from; provided once at the root
#[derive(Clone, PartialEq)]
pub struct Site {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
}

impl Site {
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(Site {
            catalog: Arc::new(Catalog::embedded()?),
            config: Arc::new(SiteConfig::embedded()?),
        })
    }
}

// SiteState
//
// the view state lives in a signal so that reading it from a component subscribes that
// component to changes.  everything goes through StateHandle so the same async flows
// run here and in the native tests
#[derive(Clone, Copy, PartialEq)]
pub struct SiteState(Signal<ViewState>);

impl SiteState {
    pub fn new(view: ViewState) -> Self {
        SiteState(Signal::new(view))
    }

    // the root class has to follow the theme in the same handler, not on the next render
    pub fn toggle_theme(&self) {
        let theme = self.update(|state| state.toggle_theme());
        browser::apply_theme(theme);
    }
}

impl StateHandle for SiteState {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.0.with(f)
    }
}

pub fn use_site_state() -> SiteState {
    use_context::<SiteState>()
}

// a derived piece of the view state
//
// the memo subscribes to the whole signal but only re-renders its component when the
// derived value changes, so a scroll does not redraw the contact form
pub fn use_view<R: PartialEq + 'static>(f: impl Fn(&ViewState) -> R + 'static) -> Memo<R> {
    let state = use_site_state();
    use_memo(move || state.read(&f))
}

pub fn use_site() -> Site {
    use_context::<Site>()
}
