//! # CLI Behavior
//!
//! This is **one possible UI client** for shoplist, not the application itself.
//! It is the only place that knows about stdin/stdout, colors and exit codes.
//!
//! ## Modes
//!
//! - **Interactive**: no trailing words. Reads lines from stdin, prints the
//!   feedback for each, stops on `BYE`/`EXIT` or EOF. The prompt is only
//!   shown when stdin is a terminal, so piped scripts produce clean output.
//! - **One-shot**: trailing words are joined into one command line and run once.
//!
//! In both modes a command that fails (e.g. an index past the end of the list)
//! is reported and is not fatal. Only startup problems, such as an unreadable
//! data file, end the process with a non-zero exit code.
//!
//! ## Module Structure
//!
//! - `commands`: Mode selection, REPL loop, logging setup
//! - `render`: Message coloring and printing
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
