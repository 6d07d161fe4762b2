use super::render::{print_command_error, print_messages, print_welcome};
use super::setup::Cli;
use clap::Parser;
use shoplist::error::{Result, ShopError};
use shoplist::init::{initialize, ShopContext};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter, e.g. `SHOPLIST_LOG=shoplist=trace`.
pub const LOG_ENV: &str = "SHOPLIST_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.as_deref())?;
    if cli.no_save {
        ctx.api.set_autosave(false);
    }
    tracing::debug!("shoplist started with data dir {:?}", ctx.data_dir);

    match cli.command_line() {
        Some(line) => run_once(&mut ctx, &line)?,
        None => run_interactive(&mut ctx)?,
    }

    // With autosave off in the config, changes are written once on the way out.
    if !cli.no_save && ctx.api.flush()? {
        tracing::debug!("saved pending changes on exit");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "shoplist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so they never mix with command feedback.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_once(ctx: &mut ShopContext, line: &str) -> Result<()> {
    match ctx.api.execute_line(line) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e @ ShopError::ItemNotFound { .. }) => {
            print_command_error(&e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_interactive(ctx: &mut ShopContext) -> Result<()> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut input = stdin.lock();

    print_welcome();
    loop {
        if show_prompt {
            print!("{}", ctx.config.prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input, leaving");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match ctx.api.execute_line(&line) {
            Ok(result) => {
                print_messages(&result.messages);
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!("command {:?} failed: {}", line.trim(), e);
                print_command_error(&e);
            }
        }
    }
    Ok(())
}
