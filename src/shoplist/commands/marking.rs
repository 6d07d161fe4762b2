use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ShoppingList;

pub const MARK_USAGE: &str = "MARK: Marks an item as purchased.
|| Parameters: MARK INDEX
|| Example: MARK 1";

pub const UNMARK_USAGE: &str = "UNMARK: Marks an item as not purchased yet.
|| Parameters: UNMARK INDEX
|| Example: UNMARK 1";

pub fn mark(list: &mut ShoppingList, index: usize) -> Result<CmdResult> {
    purchase_state(list, index, true)
}

pub fn unmark(list: &mut ShoppingList, index: usize) -> Result<CmdResult> {
    purchase_state(list, index, false)
}

fn purchase_state(list: &mut ShoppingList, index: usize, purchased: bool) -> Result<CmdResult> {
    let item = list.get_mut(index)?;
    item.purchased = purchased;
    let item = item.clone();

    let heading = if purchased {
        "Nice! I have marked this item as purchased:"
    } else {
        "OK, I have marked this item as not purchased yet:"
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{}\n  {}", heading, item)));
    Ok(result.with_affected_items(vec![item]))
}
