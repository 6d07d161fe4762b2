use crate::commands::{add, budget, clear, delete, edit, list, marking};
use crate::commands::{CmdMessage, CmdResult};

pub const USAGE: &str = "HELP: Shows this list of commands.
|| Example: HELP";

pub const EXIT_USAGE: &str = "BYE / EXIT: Saves your list and quits.
|| Example: BYE";

/// Usage text for every command, in the order they are usually needed.
pub fn usage_text() -> String {
    let sections = [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        marking::MARK_USAGE,
        marking::UNMARK_USAGE,
        list::USAGE,
        clear::USAGE,
        budget::SET_USAGE,
        budget::RESET_USAGE,
        USAGE,
        EXIT_USAGE,
    ];

    let mut text = String::from("Here are the commands you can use:\n");
    text.push_str(&sections.join("\n\n"));
    text
}

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(usage_text()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{
        ADD_WORD, CLEAR_WORD, DELETE_WORD, EDIT_WORD, EXIT_WORDS, HELP_WORD, LIST_WORD,
        MARK_WORD, RESET_BUDGET_WORD, SET_BUDGET_WORD, UNMARK_WORD,
    };

    #[test]
    fn mentions_every_command_word() {
        let text = run().feedback();
        for word in [
            ADD_WORD,
            DELETE_WORD,
            EDIT_WORD,
            MARK_WORD,
            UNMARK_WORD,
            LIST_WORD,
            CLEAR_WORD,
            SET_BUDGET_WORD,
            RESET_BUDGET_WORD,
            HELP_WORD,
        ]
        .iter()
        .chain(EXIT_WORDS.iter())
        {
            assert!(text.contains(word), "help text is missing {}", word);
        }
    }
}
