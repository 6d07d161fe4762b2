use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoplist", bin_name = "shoplist", version)]
#[command(about = "A shopping list you drive with short text commands", long_about = None)]
pub struct Cli {
    /// Directory holding the list and config (default: $SHOPLIST_HOME or the platform data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not save changes made by this run
    #[arg(long)]
    pub no_save: bool,

    /// Run a single command and exit, e.g. `shoplist ADD i/apple p/4.50`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
