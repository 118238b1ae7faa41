use gloo_console::error as console_error;

use common::state::Theme;

// anything here can fail if we are somehow not running in a page; there is nothing useful
// to do about that beyond leaving a trace in the console

// the root element carries a "dark" class while the dark theme is active, and the
// stylesheet keys every themed color off of it
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        console_error!("no document element to apply the theme to");
        return;
    };

    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        console_error!(format!("failed to apply theme: {err:?}"));
    }
}

pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        console_error!(format!("no window to open {url} in"));
        return;
    };

    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        console_error!(format!("failed to open {url}: {err:?}"));
    }
}

// reports [scroll offset, scrollable distance] on every scroll and resize, plus once up
// front so a page restored mid-way starts out condensed
pub const SCROLL_LISTENER: &str = r#"
const report = () => {
    const root = document.documentElement;
    dioxus.send([window.scrollY, root.scrollHeight - window.innerHeight]);
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report, { passive: true });
report();
"#;
