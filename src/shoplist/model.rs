use crate::error::{Result, ShopError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Formats an amount the way it is shown to the user: `$4.50`.
pub fn format_amount(amount: Decimal) -> String {
    if amount.is_sign_negative() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub purchased: bool,
}

impl Item {
    pub fn new(description: impl Into<String>, price: Decimal) -> Self {
        Self {
            description: description.into(),
            price,
            purchased: false,
        }
    }

    pub fn status_marker(&self) -> &'static str {
        if self.purchased {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.status_marker(),
            self.description,
            format_amount(self.price)
        )
    }
}

/// The shopping list and its budget.
///
/// Items are stored 0-based; every accessor taking an `index` expects the
/// 1-based position the user sees and checks bounds before touching the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<Decimal>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: Item) -> &Item {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn get(&self, index: usize) -> Result<&Item> {
        let position = self.position(index)?;
        Ok(&self.items[position])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Item> {
        let position = self.position(index)?;
        Ok(&mut self.items[position])
    }

    pub fn remove(&mut self, index: usize) -> Result<Item> {
        let position = self.position(index)?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn purchased_total(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.purchased)
            .map(|item| item.price)
            .sum()
    }

    pub fn budget(&self) -> Option<Decimal> {
        self.budget
    }

    pub fn set_budget(&mut self, amount: Decimal) {
        self.budget = Some(amount);
    }

    pub fn reset_budget(&mut self) {
        self.budget = None;
    }

    /// Budget left after paying for every item; negative when over budget.
    pub fn remaining_budget(&self) -> Option<Decimal> {
        self.budget.map(|budget| budget - self.total())
    }

    fn position(&self, index: usize) -> Result<usize> {
        crate::index::to_position(index, self.items.len()).ok_or(ShopError::ItemNotFound {
            index,
            len: self.items.len(),
        })
    }
}
