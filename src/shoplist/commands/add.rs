use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Item, ShoppingList};
use rust_decimal::Decimal;

pub const USAGE: &str = "ADD: Adds an item to the shopping list.
|| Parameters: ADD i/DESCRIPTION [p/PRICE]
|| Example: ADD i/apple p/4.50";

pub fn run(list: &mut ShoppingList, description: &str, price: Decimal) -> CmdResult {
    let item = list.add(Item::new(description, price)).clone();
    tracing::debug!("added item {:?}", item);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Got it! I have added the following item:\n  {}",
        item
    )));
    result.with_affected_items(vec![item])
}
