use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ShoppingList;
use rust_decimal::Decimal;

pub const USAGE: &str = "EDIT: Changes the description and/or price of an item.
|| Parameters: EDIT INDEX [i/DESCRIPTION] [p/PRICE]
|| Example: EDIT 2 i/apple p/2.50";

/// Overwrites the given fields of the item at `index`, leaving the rest as is.
pub fn run(
    list: &mut ShoppingList,
    index: usize,
    description: Option<&str>,
    price: Option<Decimal>,
) -> Result<CmdResult> {
    let item = list.get_mut(index)?;
    if let Some(description) = description {
        item.description = description.to_string();
    }
    if let Some(price) = price {
        item.price = price;
    }
    let item = item.clone();
    tracing::debug!("edited item {} {:?}", index, item);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Got it! I have updated the item:\n  {}. {}",
        index, item
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
    fn price_only_keeps_description() {
        let mut list = ListFixture::new().with_item("apple", dec!(4.50)).build();
        run(&mut list, 1, None, Some(dec!(9.99))).unwrap();

        let item = list.get(1).unwrap();
        assert_eq!(item.description, "apple");
        assert_eq!(item.price, dec!(9.99));
    }

    #[test]
    fn description_only_keeps_price_and_status() {
        let mut list = ListFixture::new()
            .with_purchased_item("apple", dec!(4.50))
            .build();
        let result = run(&mut list, 1, Some("green apple"), None).unwrap();

        let item = list.get(1).unwrap();
        assert_eq!(item.description, "green apple");
        assert_eq!(item.price, dec!(4.50));
        assert!(item.purchased);
        assert!(result.feedback().contains("1. [X] green apple - $4.50"));
    }

    #[test]
    fn both_fields_are_replaced() {
        let mut list = ListFixture::new().with_items(2).build();
        run(&mut list, 2, Some("pear"), Some(dec!(0.80))).unwrap();

        let item = list.get(2).unwrap();
        assert_eq!(item.description, "pear");
        assert_eq!(item.price, dec!(0.80));
        assert_eq!(list.get(1).unwrap().description, "Item 1");
    }

    #[test]
    fn missing_item_is_not_found() {
        let mut list = ListFixture::new().with_items(1).build();
        let before = list.clone();
        assert!(matches!(
            run(&mut list, 2, Some("pear"), None),
            Err(ShopError::ItemNotFound { index: 2, len: 1 })
        ));
        assert_eq!(list, before);
    }
}
