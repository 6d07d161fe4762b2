use crate::commands::{CmdMessage, CmdResult};
use crate::model::ShoppingList;

pub const USAGE: &str = "CLEAR: Removes every item from the list.
|| Example: CLEAR";

pub fn run(list: &mut ShoppingList) -> CmdResult {
    let removed = list.len();
    list.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All {} items have been removed from your shopping list.",
        removed
    )));
    result
}
