//! Filter Bar Component
//!
//! Three mutually exclusive buttons selecting the filter mode.

use leptos::prelude::*;

use crate::filter;
use crate::models::FilterMode;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filters">
            {FilterMode::ALL.iter().map(|&mode| {
                let is_selected = move || store.filter().get() == mode;
                let count = move || filter::count(mode, store.extensions().read().as_slice());
                view! {
                    <button
                        class=move || if is_selected() { "filters__button filters__button--active" } else { "filters__button" }
                        data-filter=mode.key()
                        on:click=move |_| dispatch(&store, Action::SelectFilter(mode))
                    >
                        {mode.label()}
                        <span class="filters__count">{count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
