//! # Display Indexing
//!
//! Items are stored in a plain `Vec`, so their internal position is 0-based.
//! Users never see that position: every index printed or typed is 1-based.
//!
//! ```text
//! user index    1      2      3
//! position      0      1      2
//! ```
//!
//! All conversions between the two go through [`to_position`] so the
//! off-by-one lives in exactly one place. Index `0` never resolves.

use crate::model::Item;

/// An item paired with the 1-based index it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

/// Converts a 1-based user index into a position in a list of `len` items.
pub fn to_position(index: usize, len: usize) -> Option<usize> {
    if index == 0 || index > len {
        None
    } else {
        Some(index - 1)
    }
}

/// Converts an internal position back into the index shown to the user.
pub fn to_display(position: usize) -> usize {
    position + 1
}

/// Assigns display indexes to items in list order.
pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| DisplayItem {
            index: to_display(position),
            item: item.clone(),
        })
        .collect()
}
