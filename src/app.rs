//! Extensions Manager App
//!
//! Root component: header with theme toggle, filter bar and extension list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use theme_store::{LocalStorage, ThemeStore};

use crate::components::{ExtensionList, FilterBar, ThemeToggle};
use crate::config::AppConfig;
use crate::loader;
use crate::store::{store_set_extensions, store_visible, AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let theme_store = ThemeStore::new(LocalStorage, config.theme_key.clone());

    // State
    let store = Store::new(AppState::new(Vec::new(), theme_store.load()));
    provide_context(store);

    // Load extensions on mount
    let data_url = config.data_url.clone();
    Effect::new(move |_| {
        let data_url = data_url.clone();
        spawn_local(async move {
            let loaded = loader::load(&data_url).await;
            store_set_extensions(&store, loaded);
        });
    });

    // Apply and persist theme whenever it changes
    Effect::new(move |_| {
        let current = store.theme().get();
        theme::apply(current);
        theme::persist(&theme_store, current);
    });

    let visible = Memo::new(move |_| store_visible(&store));

    view! {
        <div class="app-layout">
            <header class="nav">
                <img class="nav__logo" src="./assets/images/logo.svg" alt="Extensions Logo" />
                <ThemeToggle />
            </header>

            <main class="extensions">
                <div class="extensions__header">
                    <h1 class="extensions__title">"Extensions List"</h1>
                    <FilterBar />
                </div>

                <ExtensionList visible=visible />
            </main>
        </div>
    }
}
