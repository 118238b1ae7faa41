use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, ProjectRecord};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

// structs and types

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

// page sections reachable from the navbar
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Home,
    Work,
    Skills,
    About,
    Contact,
}

impl Section {
    // in navbar order; Home is reached through the logo instead
    pub const NAV: [Section; 4] = [
        Section::Work,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::Skills => "skills",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::Skills => "Skills",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

// what the project modal is showing, derived from the selection and playback flags
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalState {
    Closed,
    OpenImage,
    OpenVideoPaused,
    OpenVideoPlaying,
}

// what the modal's primary button should do
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectAction {
    PlayVideo,
    // open in a new browsing context; never touches the view state
    OpenExternal(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

// identifies one showing of a toast
//
// the auto-dismiss timer holds the ticket it was started for, and expiring with a stale
// ticket does nothing, which is how a replacement toast restarts the countdown
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToastTicket(u64);

// ViewState
//
// the single mutable piece of the site.  the presentation layer owns one of these and
// only changes it through the methods below, so every transition can be exercised
// without a browser
#[derive(Clone, Debug)]
pub struct ViewState {
    catalog: Arc<Catalog>,
    condense_threshold: f64,

    theme: Theme,
    mobile_menu_open: bool,
    nav_condensed: bool,
    scroll_progress: f64,
    selected_project: Option<String>,
    video_playing: bool,
    form_submitting: bool,
    toast: Option<Toast>,
    toast_generation: u64,
}

impl ViewState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        ViewState {
            catalog,
            condense_threshold: 50.0,
            theme: Theme::Dark,
            mobile_menu_open: false,
            nav_condensed: false,
            scroll_progress: 0.0,
            selected_project: None,
            video_playing: false,
            form_submitting: false,
            toast: None,
            toast_generation: 0,
        }
    }

    pub fn with_condense_threshold(mut self, px: f64) -> Self {
        self.condense_threshold = px;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // theme

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "toggled theme");
        self.theme
    }

    // navbar

    pub fn nav_condensed(&self) -> bool {
        self.nav_condensed
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    // offset_y is the vertical scroll position, scrollable the distance between the top
    // and bottom scroll positions (document height minus viewport height)
    pub fn on_scroll(&mut self, offset_y: f64, scrollable: f64) {
        self.nav_condensed = offset_y > self.condense_threshold;

        self.scroll_progress = if scrollable > 0.0 {
            (offset_y / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    // mobile menu

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    // following a nav link always closes the menu; the scrolling itself is the anchor's job
    pub fn navigate(&mut self, section: Section) {
        debug!(section = section.anchor(), "navigating");
        self.mobile_menu_open = false;
    }

    // project modal

    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        self.selected_project
            .as_deref()
            .and_then(|id| self.catalog.project(id))
    }

    pub fn video_playing(&self) -> bool {
        self.video_playing
    }

    // ids only ever come from the catalog itself, so a miss here is a bug in the caller
    pub fn select_project(&mut self, id: &str) {
        if self.catalog.project(id).is_none() {
            panic!("project {id} is not in the catalog");
        }

        debug!(project = id, "opening project");
        self.selected_project = Some(id.to_owned());
        self.video_playing = false;
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
        self.video_playing = false;
    }

    pub fn play_video(&mut self) {
        if self
            .selected_project()
            .is_some_and(|project| project.media.has_video())
        {
            self.video_playing = true;
        }
    }

    // the modal's "view project" button: play the footage if there is any, otherwise
    // hand back the demo link for the caller to open
    pub fn primary_action(&mut self) -> Option<ProjectAction> {
        let project = self.selected_project()?;

        if project.media.has_video() {
            self.play_video();
            Some(ProjectAction::PlayVideo)
        } else {
            Some(ProjectAction::OpenExternal(project.demo_link().to_owned()))
        }
    }

    pub fn repo_action(&self) -> Option<ProjectAction> {
        self.selected_project()
            .map(|project| ProjectAction::OpenExternal(project.repo_link().to_owned()))
    }

    pub fn modal_state(&self) -> ModalState {
        match self.selected_project() {
            None => ModalState::Closed,
            Some(project) if !project.media.has_video() => ModalState::OpenImage,
            Some(_) if self.video_playing => ModalState::OpenVideoPlaying,
            Some(_) => ModalState::OpenVideoPaused,
        }
    }

    // contact form

    pub fn form_submitting(&self) -> bool {
        self.form_submitting
    }

    // returns false if a submission is already in flight, in which case nothing changes
    pub fn begin_submit(&mut self) -> bool {
        if self.form_submitting {
            return false;
        }

        self.form_submitting = true;
        true
    }

    pub fn finish_submit(&mut self, outcome: &anyhow::Result<()>) -> ToastTicket {
        self.form_submitting = false;

        let toast = match outcome {
            Ok(()) => Toast::success(SUBMIT_SUCCESS_MESSAGE),
            Err(err) => Toast::error(format!("Message could not be sent: {err}")),
        };

        self.show_toast(toast)
    }

    // toast

    pub fn active_toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn show_toast(&mut self, toast: Toast) -> ToastTicket {
        self.toast_generation += 1;
        self.toast = Some(toast);
        ToastTicket(self.toast_generation)
    }

    // called by the auto-dismiss timer; a toast that has since been replaced stays up
    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        if self.toast.is_some() && ticket.0 == self.toast_generation {
            self.toast = None;
            return true;
        }

        false
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::tests::fixture;

    fn state() -> ViewState {
        ViewState::new(Arc::new(fixture()))
    }

    #[test]
    fn initial_values() {
        let state = state();

        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.mobile_menu_open());
        assert!(!state.nav_condensed());
        assert_eq!(state.modal_state(), ModalState::Closed);
        assert!(!state.video_playing());
        assert!(!state.form_submitting());
        assert!(state.active_toast().is_none());
    }

    #[test]
    fn scroll_threshold() {
        let mut state = state();

        for (offset, condensed) in [(0.0, false), (50.0, false), (51.0, true), (1000.0, true)] {
            state.on_scroll(offset, 2000.0);
            assert_eq!(state.nav_condensed(), condensed, "offset {offset}");
        }
    }

    #[test]
    fn scroll_oscillation_toggles_every_crossing() {
        let mut state = state();

        for offset in [49.0, 51.0, 49.0, 51.0] {
            state.on_scroll(offset, 2000.0);
            assert_eq!(state.nav_condensed(), offset > 50.0);
        }
    }

    #[test]
    fn configured_threshold() {
        let mut state = state().with_condense_threshold(200.0);

        state.on_scroll(150.0, 2000.0);
        assert!(!state.nav_condensed());
        state.on_scroll(201.0, 2000.0);
        assert!(state.nav_condensed());
    }

    #[test]
    fn scroll_progress_is_clamped() {
        let mut state = state();

        state.on_scroll(500.0, 1000.0);
        assert_eq!(state.scroll_progress(), 0.5);
        state.on_scroll(1500.0, 1000.0);
        assert_eq!(state.scroll_progress(), 1.0);
        state.on_scroll(-20.0, 1000.0);
        assert_eq!(state.scroll_progress(), 0.0);
        state.on_scroll(300.0, 0.0);
        assert_eq!(state.scroll_progress(), 0.0);
    }

    // components outside the navbar memoize these, so scrolling must leave them equal
    #[test]
    fn scroll_leaves_other_views_alone() {
        let mut state = state();
        state.select_project("reel");
        state.show_toast(Toast::success("hi"));

        let before = (
            state.form_submitting(),
            state.active_toast().cloned(),
            state.selected_project().cloned(),
            state.modal_state(),
            state.theme(),
            state.mobile_menu_open(),
        );

        state.on_scroll(900.0, 1000.0);

        let after = (
            state.form_submitting(),
            state.active_toast().cloned(),
            state.selected_project().cloned(),
            state.modal_state(),
            state.theme(),
            state.mobile_menu_open(),
        );
        assert_eq!(before, after);
    }

    // a resize reports the same offset against a new scrollable distance
    #[test]
    fn resize_rescales_progress() {
        let mut state = state();

        state.on_scroll(500.0, 1000.0);
        assert_eq!(state.scroll_progress(), 0.5);
        state.on_scroll(500.0, 2000.0);
        assert_eq!(state.scroll_progress(), 0.25);
        assert!(state.nav_condensed());
    }

    #[test]
    fn navigation_closes_menu() {
        let mut state = state();

        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open());

        state.navigate(Section::Skills);
        assert!(!state.mobile_menu_open());

        // closing is unconditional
        state.navigate(Section::Contact);
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn section_links() {
        assert_eq!(Section::Work.href(), "#work");
        assert_eq!(Section::Home.href(), "#home");
        assert_eq!(Section::NAV.map(Section::label), ["Work", "Skills", "About", "Contact"]);
    }

    #[test]
    fn video_modal_cycle() {
        let mut state = state();

        state.select_project("reel");
        assert_eq!(state.modal_state(), ModalState::OpenVideoPaused);

        state.play_video();
        assert_eq!(state.modal_state(), ModalState::OpenVideoPlaying);

        state.close_project();
        assert_eq!(state.modal_state(), ModalState::Closed);
        assert!(!state.video_playing());

        // re-enterable, and playback does not carry over
        state.select_project("reel");
        assert_eq!(state.modal_state(), ModalState::OpenVideoPaused);
    }

    #[test]
    fn image_modal_ignores_play() {
        let mut state = state();

        state.select_project("still");
        assert_eq!(state.modal_state(), ModalState::OpenImage);

        state.play_video();
        assert_eq!(state.modal_state(), ModalState::OpenImage);
        assert!(!state.video_playing());
    }

    #[test]
    fn switching_projects_resets_playback() {
        let mut state = state();

        state.select_project("reel");
        state.play_video();
        state.select_project("still");

        assert!(!state.video_playing());
        assert_eq!(state.selected_project().unwrap().id, "still");
    }

    #[test]
    fn play_without_selection_is_noop() {
        let mut state = state();

        state.play_video();
        assert!(!state.video_playing());
        assert_eq!(state.primary_action(), None);
        assert_eq!(state.repo_action(), None);
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn unknown_project_panics() {
        state().select_project("nope");
    }

    #[test]
    fn primary_action_branches_on_video() {
        let mut state = state();

        state.select_project("reel");
        assert_eq!(state.primary_action(), Some(ProjectAction::PlayVideo));
        assert_eq!(state.modal_state(), ModalState::OpenVideoPlaying);

        state.select_project("still");
        assert_eq!(
            state.primary_action(),
            Some(ProjectAction::OpenExternal(String::from(
                "https://example.com/still"
            )))
        );
        assert_eq!(state.modal_state(), ModalState::OpenImage);
    }

    #[test]
    fn repo_action_uses_placeholder() {
        let mut state = state();

        state.select_project("still");
        assert_eq!(
            state.repo_action(),
            Some(ProjectAction::OpenExternal(String::from("#")))
        );
    }

    #[test]
    fn submit_guard() {
        let mut state = state();

        assert!(state.begin_submit());
        assert!(!state.begin_submit());
        assert!(state.form_submitting());

        let ticket = state.finish_submit(&Ok(()));
        assert!(!state.form_submitting());
        assert_eq!(
            state.active_toast(),
            Some(&Toast::success(SUBMIT_SUCCESS_MESSAGE))
        );
        assert!(state.expire_toast(ticket));
    }

    #[test]
    fn failed_submit_shows_error() {
        let mut state = state();

        state.begin_submit();
        state.finish_submit(&Err(anyhow::Error::msg("smtp unavailable")));

        assert!(!state.form_submitting());
        let toast = state.active_toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("smtp unavailable"));
    }

    #[test]
    fn stale_ticket_does_not_expire_replacement() {
        let mut state = state();

        let first = state.show_toast(Toast::success("one"));
        let second = state.show_toast(Toast::success("two"));

        assert!(!state.expire_toast(first));
        assert_eq!(state.active_toast().unwrap().message, "two");
        assert!(state.expire_toast(second));
        assert!(state.active_toast().is_none());
    }

    #[test]
    fn dismiss_ignores_timer() {
        let mut state = state();

        let ticket = state.show_toast(Toast::success("one"));
        state.dismiss_toast();
        assert!(state.active_toast().is_none());

        // the timer firing later is harmless
        assert!(!state.expire_toast(ticket));
    }

    proptest! {
        #[test]
        fn theme_parity(toggles in 0usize..64) {
            let mut state = state();
            for _ in 0..toggles {
                state.toggle_theme();
            }

            let expected = if toggles % 2 == 0 { Theme::Dark } else { Theme::Light };
            prop_assert_eq!(state.theme(), expected);
        }

        #[test]
        fn condensed_iff_past_threshold(offset in 0.0f64..5000.0) {
            let mut state = state();
            state.on_scroll(offset, 5000.0);

            prop_assert_eq!(state.nav_condensed(), offset > 50.0);
        }
    }
}
