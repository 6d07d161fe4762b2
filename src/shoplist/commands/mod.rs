//! # Command Layer
//!
//! Every user command is one variant of [`Command`]. Parsing produces a
//! `Command` (see [`crate::parser`]); [`Command::execute`] applies it to the
//! [`ShoppingList`] it is given and reports back through a [`CmdResult`].
//!
//! The per-command logic lives in one module each and takes the list by
//! reference, so it can be tested without any storage or terminal.
//!
//! Index-taking commands resolve the index before changing anything: an
//! out-of-range index returns [`ShopError::ItemNotFound`](crate::error::ShopError)
//! and leaves the list untouched.

use crate::error::Result;
use crate::index::DisplayItem;
use crate::model::{Item, ShoppingList};
use rust_decimal::Decimal;

pub mod add;
pub mod budget;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod help;
pub mod list;
pub mod marking;

pub const ADD_WORD: &str = "ADD";
pub const DELETE_WORD: &str = "DEL";
pub const EDIT_WORD: &str = "EDIT";
pub const MARK_WORD: &str = "MARK";
pub const UNMARK_WORD: &str = "UNMARK";
pub const LIST_WORD: &str = "LIST";
pub const CLEAR_WORD: &str = "CLEAR";
pub const SET_BUDGET_WORD: &str = "BUDGET-SET";
pub const RESET_BUDGET_WORD: &str = "BUDGET-RESET";
pub const HELP_WORD: &str = "HELP";
pub const EXIT_WORDS: [&str; 2] = ["BYE", "EXIT"];

pub const FAREWELL: &str = "Bye! Hope your shopping trip goes well.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        description: String,
        price: Decimal,
    },
    Delete {
        index: usize,
    },
    Edit {
        index: usize,
        description: Option<String>,
        price: Option<Decimal>,
    },
    Mark {
        index: usize,
    },
    Unmark {
        index: usize,
    },
    List,
    Clear,
    SetBudget {
        amount: Decimal,
    },
    ResetBudget,
    Help,
    Exit,
    Incorrect {
        message: String,
    },
}

impl Command {
    pub fn incorrect(message: impl Into<String>) -> Self {
        Command::Incorrect {
            message: message.into(),
        }
    }

    /// Whether a successful execution may have changed the list or budget.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Delete { .. }
                | Command::Edit { .. }
                | Command::Mark { .. }
                | Command::Unmark { .. }
                | Command::Clear
                | Command::SetBudget { .. }
                | Command::ResetBudget
        )
    }

    pub fn execute(&self, list: &mut ShoppingList) -> Result<CmdResult> {
        match self {
            Command::Add { description, price } => Ok(add::run(list, description, *price)),
            Command::Delete { index } => delete::run(list, *index),
            Command::Edit {
                index,
                description,
                price,
            } => edit::run(list, *index, description.as_deref(), *price),
            Command::Mark { index } => marking::mark(list, *index),
            Command::Unmark { index } => marking::unmark(list, *index),
            Command::List => Ok(list::run(list)),
            Command::Clear => Ok(clear::run(list)),
            Command::SetBudget { amount } => Ok(budget::set(list, *amount)),
            Command::ResetBudget => Ok(budget::reset(list)),
            Command::Help => Ok(help::run()),
            Command::Exit => {
                let mut result = CmdResult::default().with_exit();
                result.add_message(CmdMessage::info(FAREWELL));
                Ok(result)
            }
            Command::Incorrect { message } => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(message.clone()));
                Ok(result)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents joined into the text shown to the user.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|message| message.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == MessageLevel::Error)
    }
}
