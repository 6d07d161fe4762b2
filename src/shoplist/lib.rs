//! # Shoplist Architecture
//!
//! Shoplist is a shopping list driven by short text commands:
//!
//! ```text
//! > ADD i/apple p/4.50
//! Got it! I have added the following item:
//!   [ ] apple - $4.50
//! ```
//!
//! The crate is a library first; the `shoplist` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap arguments, REPL loop, colored output, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - parse → execute → autosave                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + Command Layer (commands/*.rs)         │
//! │  - raw line → Command, Command applied to a ShoppingList    │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global state: the [`model::ShoppingList`] is owned by the API
//! and passed by reference to every command.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for running commands
//! - [`parser`]: Turns input lines into commands
//! - [`commands`]: The command variants and their logic
//! - [`model`]: `Item` and `ShoppingList`
//! - [`index`]: 1-based display indexes
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data dir resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod parser;
pub mod store;
