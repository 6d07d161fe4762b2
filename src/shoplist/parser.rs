//! # Input Parsing
//!
//! Turns one line of user input into exactly one [`Command`].
//!
//! A line is a command word followed by optional arguments:
//!
//! ```text
//! ADD i/apple p/4.50
//! └┬┘ └──────┬─────┘
//! word    arguments
//! ```
//!
//! The command word is matched exactly and case-sensitively. Unknown words
//! (and empty lines) become [`Command::Help`].
//!
//! `ADD` and `EDIT` take their fields through markers that may appear in
//! either order: `i/` introduces the description and `p/` the price. Text in
//! front of the first marker is the leading segment, which `EDIT` reads as
//! the item index.
//!
//! Parsing never fails: malformed input yields [`Command::Incorrect`] carrying
//! a usage hint for the command that was attempted.

use crate::commands::{
    Command, ADD_WORD, CLEAR_WORD, DELETE_WORD, EDIT_WORD, EXIT_WORDS, HELP_WORD, LIST_WORD,
    MARK_WORD, RESET_BUDGET_WORD, SET_BUDGET_WORD, UNMARK_WORD,
};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DESCRIPTION_MARKER: &str = "i/";
pub const PRICE_MARKER: &str = "p/";
pub const BUDGET_MARKER: &str = "b/";

pub const ADD_ERROR: &str = "Oops! For that to be done properly, check if these are met:
 - Description of an item cannot be empty.
 - Price of an item has to be a non-negative decimal.
 - 'i/' must be present, 'p/' is optional.
|| Example: ADD i/apple p/2.50";

pub const EDIT_ERROR: &str = "Oops! For that to be done properly, check if these are met:
 - Index of item must be a positive number.
 - Description of an item cannot be empty.
 - Price of an item has to be a non-negative decimal.
 - At least 'i/' or 'p/' should be present.
|| Example: EDIT 2 i/apple p/2.50";

pub const DELETE_ERROR: &str = "Can't find the item to delete! Index of item must be a positive number.
|| Example: DEL 1";

pub const MARK_ERROR: &str = "Can't find the item to mark! Try again.
|| Example: MARK 1";

pub const UNMARK_ERROR: &str = "Can't find the item to unmark! Try again.
|| Example: UNMARK 1";

pub const BUDGET_ERROR: &str = "Budget must be a non-negative decimal amount.
|| Example: BUDGET-SET b/50.00";

/// The pieces of an `ADD`/`EDIT` argument string, split on the item markers.
///
/// All fields are trimmed. A field is `None` when its marker is absent and
/// `Some("")` when the marker is present with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArgs<'a> {
    pub leading: &'a str,
    pub description: Option<&'a str>,
    pub price: Option<&'a str>,
}

pub fn parse(input: &str) -> Command {
    let (word, args) = split_command_and_args(input);

    let command = match word {
        ADD_WORD => parse_add(args),
        MARK_WORD => parse_mark(args, MARK_ERROR, |index| Command::Mark { index }),
        UNMARK_WORD => parse_mark(args, UNMARK_ERROR, |index| Command::Unmark { index }),
        EDIT_WORD => parse_edit(args),
        DELETE_WORD => parse_delete(args),
        LIST_WORD => Command::List,
        CLEAR_WORD => Command::Clear,
        SET_BUDGET_WORD => parse_set_budget(args),
        RESET_BUDGET_WORD => Command::ResetBudget,
        HELP_WORD => Command::Help,
        word if EXIT_WORDS.contains(&word) => Command::Exit,
        _ => Command::Help,
    };

    if let Command::Incorrect { .. } = command {
        tracing::info!("rejected input {:?}", input);
    } else {
        tracing::debug!("parsed {:?} as {:?}", input, command);
    }
    command
}

/// Splits off the command word at the first whitespace run.
///
/// The arguments are `None` when the line is a single word.
pub fn split_command_and_args(input: &str) -> (&str, Option<&str>) {
    let trimmed = input.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim())),
        None => (trimmed, None),
    }
}

/// Splits `args` on the first `i/` and first `p/` marker.
pub fn split_item_args(args: &str) -> ItemArgs<'_> {
    let marker_len = DESCRIPTION_MARKER.len();
    let description_at = args.find(DESCRIPTION_MARKER);
    let price_at = args.find(PRICE_MARKER);

    match (description_at, price_at) {
        (None, None) => ItemArgs {
            leading: args.trim(),
            description: None,
            price: None,
        },
        (Some(d), None) => ItemArgs {
            leading: args[..d].trim(),
            description: Some(args[d + marker_len..].trim()),
            price: None,
        },
        (None, Some(p)) => ItemArgs {
            leading: args[..p].trim(),
            description: None,
            price: Some(args[p + marker_len..].trim()),
        },
        // p/4.50 i/apple
        (Some(d), Some(p)) if p < d => ItemArgs {
            leading: args[..p].trim(),
            description: Some(args[d + marker_len..].trim()),
            price: Some(args[p + marker_len..d].trim()),
        },
        // i/apple p/4.50
        (Some(d), Some(p)) => ItemArgs {
            leading: args[..d].trim(),
            description: Some(args[d + marker_len..p].trim()),
            price: Some(args[p + marker_len..].trim()),
        },
    }
}

/// A positive integer, as typed by the user for a 1-based index.
pub fn parse_index(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok().filter(|index| *index > 0)
}

/// A non-negative decimal amount. `-0` is accepted and stored as `0`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim())
        .ok()
        .filter(|amount| *amount >= Decimal::ZERO)
        .map(|amount| amount.abs())
}

fn parse_add(args: Option<&str>) -> Command {
    let Some(args) = args else {
        return Command::incorrect(ADD_ERROR);
    };
    let item = split_item_args(args);

    let description = match item.description {
        Some(description) if !description.is_empty() => description,
        _ => return Command::incorrect(ADD_ERROR),
    };
    let price = match item.price {
        None => Decimal::ZERO,
        Some(text) => match parse_amount(text) {
            Some(price) => price,
            None => return Command::incorrect(ADD_ERROR),
        },
    };

    Command::Add {
        description: description.to_string(),
        price,
    }
}

fn parse_edit(args: Option<&str>) -> Command {
    let Some(args) = args else {
        return Command::incorrect(EDIT_ERROR);
    };
    let item = split_item_args(args);

    if item.description.is_none() && item.price.is_none() {
        return Command::incorrect(EDIT_ERROR);
    }
    let Some(index) = parse_index(item.leading) else {
        return Command::incorrect(EDIT_ERROR);
    };
    if item.description == Some("") {
        return Command::incorrect(EDIT_ERROR);
    }
    let price = match item.price {
        None => None,
        Some(text) => match parse_amount(text) {
            Some(price) => Some(price),
            None => return Command::incorrect(EDIT_ERROR),
        },
    };

    Command::Edit {
        index,
        description: item.description.map(str::to_string),
        price,
    }
}

/// Shared by `MARK` and `UNMARK`: exactly one positive integer token.
fn parse_mark(args: Option<&str>, error: &str, build: fn(usize) -> Command) -> Command {
    let Some(index) = args.and_then(single_token).and_then(parse_index) else {
        return Command::incorrect(error);
    };
    build(index)
}

fn parse_delete(args: Option<&str>) -> Command {
    match args.and_then(single_token).and_then(parse_index) {
        Some(index) => Command::Delete { index },
        None => Command::incorrect(DELETE_ERROR),
    }
}

fn parse_set_budget(args: Option<&str>) -> Command {
    let amount = args
        .and_then(single_token)
        .map(|token| token.strip_prefix(BUDGET_MARKER).unwrap_or(token))
        .and_then(parse_amount);
    match amount {
        Some(amount) => Command::SetBudget { amount },
        None => Command::incorrect(BUDGET_ERROR),
    }
}

fn single_token(args: &str) -> Option<&str> {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn is_incorrect(command: &Command) -> bool {
        matches!(command, Command::Incorrect { .. })
    }

    #[test]
    fn splits_on_first_whitespace_run() {
        assert_eq!(
            split_command_and_args("  ADD   i/apple pie  "),
            ("ADD", Some("i/apple pie"))
        );
        assert_eq!(split_command_and_args("LIST"), ("LIST", None));
        assert_eq!(split_command_and_args("DEL\t2"), ("DEL", Some("2")));
    }

    #[test]
    fn item_args_description_only() {
        let args = split_item_args("i/apple");
        assert_eq!(args.description, Some("apple"));
        assert_eq!(args.price, None);
    }

    #[test]
    fn item_args_description_then_price() {
        let args = split_item_args("2 i/green apple p/4.50");
        assert_eq!(args.leading, "2");
        assert_eq!(args.description, Some("green apple"));
        assert_eq!(args.price, Some("4.50"));
    }

    #[test]
    fn item_args_price_then_description() {
        let args = split_item_args("2 p/4.50 i/green apple");
        assert_eq!(args.leading, "2");
        assert_eq!(args.description, Some("green apple"));
        assert_eq!(args.price, Some("4.50"));
    }

    #[test]
    fn item_args_without_markers() {
        let args = split_item_args("apple 4.50");
        assert_eq!(args.leading, "apple 4.50");
        assert_eq!(args.description, None);
        assert_eq!(args.price, None);
    }

    #[test]
    fn add_with_description_and_price() {
        assert_eq!(
            parse("ADD i/apple p/4.50"),
            Command::Add {
                description: "apple".into(),
                price: dec!(4.50)
            }
        );
        assert_eq!(
            parse("ADD p/4.50 i/apple"),
            Command::Add {
                description: "apple".into(),
                price: dec!(4.50)
            }
        );
    }

    #[test]
    fn add_without_price_defaults_to_zero() {
        assert_eq!(
            parse("ADD i/bread"),
            Command::Add {
                description: "bread".into(),
                price: Decimal::ZERO
            }
        );
    }

    #[test]
    fn add_ignores_leading_text() {
        assert_eq!(
            parse("ADD 1 i/apple p/4.50"),
            Command::Add {
                description: "apple".into(),
                price: dec!(4.50)
            }
        );
    }

    #[test]
    fn add_rejects_bad_input() {
        assert!(is_incorrect(&parse("ADD")));
        assert!(is_incorrect(&parse("ADD p/4.50")));
        assert!(is_incorrect(&parse("ADD apple")));
        assert!(is_incorrect(&parse("ADD i/ p/4.50")));
        assert!(is_incorrect(&parse("ADD i/apple p/cheap")));
        assert!(is_incorrect(&parse("ADD i/apple p/-1")));
        assert!(is_incorrect(&parse("ADD i/apple p/")));
        assert_eq!(parse("ADD p/1"), Command::incorrect(ADD_ERROR));
    }

    #[test]
    fn edit_price_only() {
        assert_eq!(
            parse("EDIT 1 p/9.99"),
            Command::Edit {
                index: 1,
                description: None,
                price: Some(dec!(9.99))
            }
        );
    }

    #[test]
    fn edit_in_both_marker_orders() {
        let expected = Command::Edit {
            index: 2,
            description: Some("apple".into()),
            price: Some(dec!(2.50)),
        };
        assert_eq!(parse("EDIT 2 i/apple p/2.50"), expected);
        assert_eq!(parse("EDIT 2 p/2.50 i/apple"), expected);
    }

    #[test]
    fn edit_rejects_bad_input() {
        assert!(is_incorrect(&parse("EDIT")));
        assert!(is_incorrect(&parse("EDIT 1")));
        assert!(is_incorrect(&parse("EDIT i/apple")));
        assert!(is_incorrect(&parse("EDIT x i/apple")));
        assert!(is_incorrect(&parse("EDIT 0 i/apple")));
        assert!(is_incorrect(&parse("EDIT 1 i/")));
        assert!(is_incorrect(&parse("EDIT 1 p/abc")));
    }

    #[test]
    fn mark_and_unmark() {
        assert_eq!(parse("MARK 3"), Command::Mark { index: 3 });
        assert_eq!(parse("UNMARK  2 "), Command::Unmark { index: 2 });
    }

    #[test]
    fn mark_errors_return_immediately() {
        assert_eq!(parse("MARK"), Command::incorrect(MARK_ERROR));
        assert_eq!(parse("MARK 1 2"), Command::incorrect(MARK_ERROR));
        assert_eq!(parse("MARK one"), Command::incorrect(MARK_ERROR));
        assert_eq!(parse("MARK 0"), Command::incorrect(MARK_ERROR));
        assert_eq!(parse("UNMARK -1"), Command::incorrect(UNMARK_ERROR));
    }

    #[test]
    fn delete_takes_single_index() {
        assert_eq!(parse("DEL 1"), Command::Delete { index: 1 });
        assert!(is_incorrect(&parse("DEL")));
        assert!(is_incorrect(&parse("DEL apple")));
        assert!(is_incorrect(&parse("DEL 1 2")));
        assert!(is_incorrect(&parse("DEL 0")));
    }

    #[test]
    fn set_budget_with_and_without_marker() {
        assert_eq!(
            parse("BUDGET-SET 50"),
            Command::SetBudget { amount: dec!(50) }
        );
        assert_eq!(
            parse("BUDGET-SET b/12.75"),
            Command::SetBudget { amount: dec!(12.75) }
        );
        assert!(is_incorrect(&parse("BUDGET-SET")));
        assert!(is_incorrect(&parse("BUDGET-SET b/-3")));
        assert!(is_incorrect(&parse("BUDGET-SET lots")));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(
            parse("ADD i/free sample p/-0"),
            Command::Add {
                description: "free sample".into(),
                price: Decimal::ZERO
            }
        );
        assert_eq!(
            parse("BUDGET-SET -0.00"),
            Command::SetBudget {
                amount: Decimal::ZERO
            }
        );
        let amount = parse_amount("-0").unwrap();
        assert!(!amount.is_sign_negative());
    }

    #[test]
    fn argument_free_commands() {
        assert_eq!(parse("LIST"), Command::List);
        assert_eq!(parse("LIST everything"), Command::List);
        assert_eq!(parse("CLEAR"), Command::Clear);
        assert_eq!(parse("BUDGET-RESET"), Command::ResetBudget);
        assert_eq!(parse("HELP"), Command::Help);
        assert_eq!(parse("BYE"), Command::Exit);
        assert_eq!(parse("EXIT"), Command::Exit);
    }

    #[test]
    fn unknown_words_fall_back_to_help() {
        assert_eq!(parse("xyz"), Command::Help);
        assert_eq!(parse("add i/apple"), Command::Help);
        assert_eq!(parse(""), Command::Help);
    }
}
