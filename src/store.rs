//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All user
//! interaction goes through [`Action`], addressed by extension id.

use leptos::prelude::*;
use reactive_stores::Store;
use theme_store::Theme;

use crate::collection::ExtensionCollection;
use crate::filter;
use crate::models::{Extension, FilterMode};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loaded extensions, the single mutable copy
    pub extensions: ExtensionCollection,
    /// Current filter
    pub filter: FilterMode,
    pub theme: Theme,
}

impl AppState {
    pub fn new(extensions: Vec<Extension>, theme: Theme) -> Self {
        Self {
            extensions: ExtensionCollection::new(extensions),
            filter: FilterMode::All,
            theme,
        }
    }
}

/// User operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectFilter(FilterMode),
    Toggle(u32),
    Remove(u32),
    ToggleTheme,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the collection with freshly loaded records
pub fn store_set_extensions(store: &AppStore, items: Vec<Extension>) {
    let collection = ExtensionCollection::new(items);
    if collection.is_empty() {
        log::warn!("[APP] No extensions to show");
    } else {
        log::debug!("[APP] Showing {} extensions", collection.len());
    }
    store.extensions().set(collection);
}

/// Visible extensions for the current filter
pub fn store_visible(store: &AppStore) -> Vec<Extension> {
    let mode = store.filter().get();
    filter::apply(mode, store.extensions().read().as_slice())
}

/// Apply an action to the store, touching only the affected field
pub fn dispatch(store: &AppStore, action: Action) {
    log::debug!("[APP] {:?}", action);
    let found = match action {
        Action::SelectFilter(mode) => {
            store.filter().set(mode);
            true
        }
        Action::Toggle(id) => store.extensions().write().toggle(id).is_some(),
        Action::Remove(id) => store.extensions().write().remove(id).is_some(),
        Action::ToggleTheme => {
            store.theme().update(|t| *t = t.toggled());
            true
        }
    };
    if !found {
        log::debug!("[APP] Ignoring {:?}: no such extension", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ext(id: u32, is_active: bool) -> Extension {
        Extension {
            id,
            name: format!("Extension {}", id),
            description: String::new(),
            logo: String::new(),
            is_active,
        }
    }

    fn two_item_store() -> AppStore {
        Store::new(AppState::new(vec![make_ext(1, true), make_ext(2, false)], Theme::Light))
    }

    fn visible_ids(store: &AppStore) -> Vec<u32> {
        store_visible(store).iter().map(|e| e.id).collect()
    }

    fn all_ids(store: &AppStore) -> Vec<u32> {
        store.extensions().get_untracked().as_slice().iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_select_active_shows_active_only() {
        let store = two_item_store();
        dispatch(&store, Action::SelectFilter(FilterMode::Active));
        assert_eq!(visible_ids(&store), vec![1]);
    }

    #[test]
    fn test_toggle_out_of_active_view() {
        let store = two_item_store();
        dispatch(&store, Action::SelectFilter(FilterMode::Active));
        dispatch(&store, Action::Toggle(1));

        assert!(visible_ids(&store).is_empty());
        assert_eq!(all_ids(&store), vec![1, 2]);
        assert!(!store.extensions().get_untracked().get(1).unwrap().is_active);
    }

    #[test]
    fn test_toggle_into_inactive_view() {
        let store = two_item_store();
        dispatch(&store, Action::SelectFilter(FilterMode::Inactive));
        dispatch(&store, Action::Toggle(1));
        assert_eq!(visible_ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_remove_in_all_mode() {
        let store = two_item_store();
        dispatch(&store, Action::Remove(2));

        assert_eq!(store.extensions().get_untracked().as_slice(), &[make_ext(1, true)]);
        assert_eq!(visible_ids(&store), vec![1]);
    }

    #[test]
    fn test_remove_reapplies_filter() {
        let store = Store::new(AppState::new(
            vec![make_ext(1, true), make_ext(2, false), make_ext(3, true)],
            Theme::Light,
        ));
        dispatch(&store, Action::SelectFilter(FilterMode::Active));
        dispatch(&store, Action::Remove(1));
        assert_eq!(visible_ids(&store), vec![3]);
    }

    #[test]
    fn test_stale_id_is_noop() {
        let store = two_item_store();
        dispatch(&store, Action::Remove(2));
        let before = store.extensions().get_untracked();

        dispatch(&store, Action::Toggle(2));
        dispatch(&store, Action::Remove(2));
        assert_eq!(store.extensions().get_untracked(), before);
    }

    #[test]
    fn test_set_extensions_replaces_collection() {
        let store = two_item_store();
        dispatch(&store, Action::SelectFilter(FilterMode::Inactive));
        store_set_extensions(&store, vec![make_ext(5, false), make_ext(6, true)]);
        assert_eq!(all_ids(&store), vec![5, 6]);
        assert_eq!(visible_ids(&store), vec![5]);
    }

    #[test]
    fn test_failed_load_shows_nothing() {
        let store = Store::new(AppState::default());
        let loaded = crate::loader::or_empty("./data.json", Err(crate::loader::LoadError::Status(500)));
        store_set_extensions(&store, loaded);

        for mode in FilterMode::ALL {
            dispatch(&store, Action::SelectFilter(mode));
            assert!(visible_ids(&store).is_empty());
        }
        // Controls stay usable on an empty list
        dispatch(&store, Action::Toggle(1));
        dispatch(&store, Action::Remove(1));
        assert!(all_ids(&store).is_empty());
    }

    #[test]
    fn test_toggle_theme_flips() {
        let store = two_item_store();
        dispatch(&store, Action::ToggleTheme);
        assert_eq!(store.theme().get_untracked(), Theme::Dark);
        dispatch(&store, Action::ToggleTheme);
        assert_eq!(store.theme().get_untracked(), Theme::Light);
    }

    #[test]
    fn test_filter_survives_mutations() {
        let store = two_item_store();
        dispatch(&store, Action::SelectFilter(FilterMode::Inactive));
        dispatch(&store, Action::Toggle(2));
        dispatch(&store, Action::Remove(1));
        assert_eq!(store.filter().get_untracked(), FilterMode::Inactive);
        assert!(visible_ids(&store).is_empty());
    }
}
