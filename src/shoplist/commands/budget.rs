use crate::commands::{CmdMessage, CmdResult};
use crate::model::{format_amount, ShoppingList};
use rust_decimal::Decimal;

pub const SET_USAGE: &str = "BUDGET-SET: Sets your spending budget.
|| Parameters: BUDGET-SET [b/]AMOUNT
|| Example: BUDGET-SET b/50.00";

pub const RESET_USAGE: &str = "BUDGET-RESET: Removes your spending budget.
|| Example: BUDGET-RESET";

pub fn set(list: &mut ShoppingList, amount: Decimal) -> CmdResult {
    list.set_budget(amount);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Budget set to {}.",
        format_amount(amount)
    )));
    result
}

pub fn reset(list: &mut ShoppingList) -> CmdResult {
    let mut result = CmdResult::default();
    if list.budget().is_none() {
        result.add_message(CmdMessage::info("No budget was set."));
        return result;
    }

    list.reset_budget();
    result.add_message(CmdMessage::success("Your budget has been reset."));
    result
}
