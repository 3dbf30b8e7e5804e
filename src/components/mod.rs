//! UI Components
//!
//! Reusable Leptos components.

mod extension_card;
mod extension_list;
mod filter_bar;
mod theme_toggle;

pub use extension_card::ExtensionCard;
pub use extension_list::ExtensionList;
pub use filter_bar::FilterBar;
pub use theme_toggle::ThemeToggle;
