//! # API Facade
//!
//! [`ShopApi`] is the single entry point for running shopping list commands,
//! whatever the UI. It owns the loaded [`ShoppingList`] and the store it came
//! from, and for each input line it:
//!
//! 1. parses the line into a [`Command`](crate::commands::Command)
//! 2. executes it against the list
//! 3. saves the list if the command may have changed it and autosave is on
//!
//! The API does no I/O of its own beyond the store and returns structured
//! [`CmdResult`]s; printing is left to the caller.
//!
//! Generic over [`DataStore`]: production uses `ShopApi<FileStore>`, tests use
//! `ShopApi<InMemoryStore>`.

use crate::commands::{self, Command};
use crate::error::Result;
use crate::model::ShoppingList;
use crate::parser;
use crate::store::DataStore;

pub struct ShopApi<S: DataStore> {
    store: S,
    list: ShoppingList,
    autosave: bool,
    unsaved: bool,
}

impl<S: DataStore> ShopApi<S> {
    /// Loads the saved list from `store`.
    pub fn open(store: S, autosave: bool) -> Result<Self> {
        let list = store.load()?;
        Ok(Self {
            store,
            list,
            autosave,
            unsaved: false,
        })
    }

    pub fn execute_line(&mut self, line: &str) -> Result<commands::CmdResult> {
        let command = parser::parse(line);
        self.execute(&command)
    }

    /// Runs `command`. A command that fails leaves the list untouched.
    ///
    /// If the command succeeds but the autosave fails, the in-memory change is
    /// kept and stays pending for the next [`flush`](Self::flush).
    pub fn execute(&mut self, command: &Command) -> Result<commands::CmdResult> {
        let result = command.execute(&mut self.list)?;
        if command.is_mutating() {
            self.unsaved = true;
            if self.autosave {
                self.save()?;
            }
        }
        Ok(result)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.list)?;
        self.unsaved = false;
        Ok(())
    }

    /// Saves only if a command changed the list since the last save.
    /// Returns whether anything was written.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.unsaved {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
