//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};
use crate::theme;

/// Header button switching between light and dark themes
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let icon = move || theme::toggle_icon(store.theme().get());

    view! {
        <button
            class="nav__toggle"
            id="nav-toggle"
            on:click=move |_| dispatch(&store, Action::ToggleTheme)
        >
            <img
                id="nav-toggle-img"
                src=move || icon().0
                alt=move || icon().1
            />
        </button>
    }
}
