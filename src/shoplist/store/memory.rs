use super::DataStore;
use crate::error::Result;
use crate::model::ShoppingList;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    list: ShoppingList,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(list: ShoppingList) -> Self {
        Self { list, saves: 0 }
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> &ShoppingList {
        &self.list
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ShoppingList> {
        Ok(self.list.clone())
    }

    fn save(&mut self, list: &ShoppingList) -> Result<()> {
        self.list = list.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Item, ShoppingList};
    use rust_decimal::Decimal;

    pub struct ListFixture {
        pub list: ShoppingList,
    }

    impl Default for ListFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self {
                list: ShoppingList::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let description = format!("Item {}", i + 1);
                self.list.add(Item::new(description, Decimal::from(i + 1)));
            }
            self
        }

        pub fn with_item(mut self, description: &str, price: Decimal) -> Self {
            self.list.add(Item::new(description, price));
            self
        }

        pub fn with_purchased_item(mut self, description: &str, price: Decimal) -> Self {
            let mut item = Item::new(description, price);
            item.purchased = true;
            self.list.add(item);
            self
        }

        pub fn with_budget(mut self, amount: Decimal) -> Self {
            self.list.set_budget(amount);
            self
        }

        pub fn build(self) -> ShoppingList {
            self.list
        }
    }
}
