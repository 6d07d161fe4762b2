use colored::*;
use shoplist::api::{CmdMessage, MessageLevel};
use shoplist::error::ShopError;

pub const WELCOME: &str = "Welcome to shoplist! Type HELP to see what you can do.";

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

/// Reports a failed command without ending the session.
pub fn print_command_error(error: &ShopError) {
    println!("{}", error.to_string().red());
}

pub fn print_welcome() {
    println!("{}", WELCOME.dimmed());
}
