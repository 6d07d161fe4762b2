//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the shopping list lives between runs.
//! Commands never see a store: they operate on the [`ShoppingList`] value the
//! API loaded, and the API hands the updated list back to the store.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON storage
//!   - The whole list (items and budget) lives in one file, `shopping_list.json` by default
//!   - A missing file loads as an empty list
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert on autosave behaviour
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── shopping_list.json  # {"items": [...], "budget": "50"}
//! └── config.json         # ShopConfig
//! ```

use crate::error::Result;
use crate::model::ShoppingList;

pub mod fs;
pub mod memory;

/// Abstract interface for shopping list persistence.
pub trait DataStore {
    /// Load the saved list, or an empty one if nothing was saved yet
    fn load(&self) -> Result<ShoppingList>;

    /// Replace the saved list with `list`
    fn save(&mut self, list: &ShoppingList) -> Result<()>;
}
