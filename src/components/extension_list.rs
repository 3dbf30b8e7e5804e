//! Extension List Component
//!
//! Renders the visible extensions for the current filter. An empty view
//! leaves the list empty.

use leptos::prelude::*;

use crate::components::ExtensionCard;
use crate::models::Extension;

#[component]
pub fn ExtensionList(visible: Memo<Vec<Extension>>) -> impl IntoView {
    view! {
        <ul class="extensions__list" id="extensions-list">
            <For
                each=move || visible.get()
                // Any change to a record rebuilds its card
                key=|ext| (ext.id, ext.is_active)
                children=move |ext| view! { <ExtensionCard extension=ext /> }
            />
        </ul>
    }
}
