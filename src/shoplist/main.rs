//! # Shoplist CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Two ways to use it:
//!
//! - `shoplist` starts an interactive session reading one command per line
//!   until `BYE`/`EXIT` or end of input.
//! - `shoplist ADD i/apple p/4.50` runs a single command and exits.
//!
//! Everything from `api.rs` inward is UI agnostic; the CLI owns argument
//! parsing, logging setup, printing and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
