use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ShoppingList;

pub const USAGE: &str = "DEL: Deletes an item in the list.
|| Parameters: DEL INDEX
|| Example: DEL 1";

pub fn run(list: &mut ShoppingList, index: usize) -> Result<CmdResult> {
    let item = list.remove(index)?;
    tracing::debug!("removed item {} {:?}", index, item);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Got it! I have removed the following item:\n  {}",
        item
    )));
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopError;
    use crate::store::memory::fixtures::ListFixture;
    use rust_decimal_macros::dec;

    #[test]
    fn removes_the_only_item() {
        let mut list = ListFixture::new().with_item("apple", dec!(4.50)).build();
        let result = run(&mut list, 1).unwrap();

        assert!(list.is_empty());
        assert!(result.feedback().contains("apple"));
        assert_eq!(result.affected_items[0].description, "apple");
    }

    #[test]
    fn later_items_shift_down() {
        let mut list = ListFixture::new().with_items(3).build();
        run(&mut list, 2).unwrap();
        assert_eq!(list.get(2).unwrap().description, "Item 3");
    }

    #[test]
    fn out_of_range_leaves_list_untouched() {
        let mut list = ListFixture::new().with_items(2).build();
        let before = list.clone();

        assert!(matches!(run(&mut list, 0), Err(ShopError::ItemNotFound { .. })));
        assert!(matches!(run(&mut list, 3), Err(ShopError::ItemNotFound { .. })));
        assert_eq!(list, before);
    }
}
