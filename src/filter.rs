//! Filter Utilities
//!
//! Derives the visible subset of extensions for a filter mode.

use crate::models::{Extension, FilterMode};

/// Stable filter: keeps input order, never mutates `items`
pub fn apply(mode: FilterMode, items: &[Extension]) -> Vec<Extension> {
    items.iter().filter(|e| mode.matches(e)).cloned().collect()
}

/// Number of items a mode would show
pub fn count(mode: FilterMode, items: &[Extension]) -> usize {
    items.iter().filter(|e| mode.matches(e)).count()
}
