//! Theme Application
//!
//! Reflects the theme on the `<html>` element via the `dark` class.

use std::fmt;

use leptos::prelude::*;
use theme_store::{PreferenceStore, Theme, ThemeStore};

const DARK_CLASS: &str = "dark";
const NO_TRANSITIONS_CLASS: &str = "disable-transitions";

fn root_element() -> Option<web_sys::Element> {
    document().document_element()
}

/// Log a failed class-list update; the theme switch carries on regardless
fn warn_on_err<T, E: fmt::Debug>(step: &str, result: Result<T, E>) -> Option<T> {
    result
        .map_err(|e| log::warn!("[THEME] Could not {}: {:?}", step, e))
        .ok()
}

/// Apply `theme` to the document root without animating the switch
pub fn apply(theme: Theme) {
    let Some(root) = root_element() else {
        log::warn!("[THEME] No document element");
        return;
    };
    let classes = root.class_list();
    warn_on_err("pause transitions", classes.add_1(NO_TRANSITIONS_CLASS));
    warn_on_err(
        "toggle dark class",
        classes.toggle_with_force(DARK_CLASS, theme.is_dark()),
    );
    enable_transitions_next_frame();
}

/// Drop the transition guard once the current frame has painted
pub fn enable_transitions_next_frame() {
    request_animation_frame(|| {
        if let Some(root) = root_element() {
            warn_on_err("resume transitions", root.class_list().remove_1(NO_TRANSITIONS_CLASS));
        }
    });
}

/// Save `theme` as the stored preference. A failed write is logged and
/// the theme stays applied for this session.
pub fn persist(prefs: &ThemeStore<impl PreferenceStore>, theme: Theme) {
    if let Err(e) = prefs.save(theme) {
        log::warn!("[THEME] Preference not saved: {}", e);
    }
}

/// Icon path and alt text for the theme toggle button
pub fn toggle_icon(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("./assets/images/icon-sun.svg", "Light Mode Icon"),
        Theme::Light => ("./assets/images/icon-moon.svg", "Dark Mode Icon"),
    }
}
