use crate::commands::{CmdMessage, CmdResult};
use crate::index::{index_items, DisplayItem};
use crate::model::{format_amount, ShoppingList};
use unicode_width::UnicodeWidthStr;

pub const USAGE: &str = "LIST: Shows every item with its price, the total and your budget.
|| Example: LIST";

pub const EMPTY_MESSAGE: &str = "Your shopping list is empty.";

pub fn run(list: &ShoppingList) -> CmdResult {
    let listed = index_items(list.items());
    let mut result = CmdResult::default();

    if listed.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    } else {
        let mut lines = vec!["Here are the items in your shopping list:".to_string()];
        lines.extend(format_rows(&listed));
        result.add_message(CmdMessage::info(lines.join("\n")));
        result.add_message(CmdMessage::info(format!(
            "Total: {} (purchased: {})",
            format_amount(list.total()),
            format_amount(list.purchased_total())
        )));
    }

    if let (Some(budget), Some(remaining)) = (list.budget(), list.remaining_budget()) {
        if remaining.is_sign_negative() {
            result.add_message(CmdMessage::warning(format!(
                "Budget: {} | Over budget by {}",
                format_amount(budget),
                format_amount(remaining.abs())
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Budget: {} | Remaining: {}",
                format_amount(budget),
                format_amount(remaining)
            )));
        }
    }

    result.with_listed_items(listed)
}

/// One aligned row per item: `index. [X] description   $price`.
fn format_rows(listed: &[DisplayItem]) -> Vec<String> {
    let index_width = listed
        .iter()
        .map(|dp| dp.index.to_string().len())
        .max()
        .unwrap_or(1);
    let description_width = listed
        .iter()
        .map(|dp| dp.item.description.width())
        .max()
        .unwrap_or(0);
    let prices: Vec<String> = listed
        .iter()
        .map(|dp| format_amount(dp.item.price))
        .collect();
    let price_width = prices.iter().map(|p| p.len()).max().unwrap_or(0);

    listed
        .iter()
        .zip(prices)
        .map(|(dp, price)| {
            let padding = description_width.saturating_sub(dp.item.description.width());
            format!(
                "{:>iw$}. {} {}{}  {:>pw$}",
                dp.index,
                dp.item.status_marker(),
                dp.item.description,
                " ".repeat(padding),
                price,
                iw = index_width,
                pw = price_width
            )
        })
        .collect()
}
