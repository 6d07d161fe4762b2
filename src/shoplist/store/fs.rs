use super::DataStore;
use crate::error::{Result, ShopError};
use crate::model::ShoppingList;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "shopping_list.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShopError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ShoppingList> {
        let data_file = self.data_file();
        if !data_file.exists() {
            tracing::debug!("no data file at {:?}, starting with an empty list", data_file);
            return Ok(ShoppingList::new());
        }

        let content = fs::read_to_string(&data_file).map_err(ShopError::Io)?;
        if content.trim().is_empty() {
            return Ok(ShoppingList::new());
        }
        let list: ShoppingList =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        tracing::debug!("loaded {} items from {:?}", list.len(), data_file);
        Ok(list)
    }

    fn save(&mut self, list: &ShoppingList) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(list).map_err(ShopError::Serialization)?;
        fs::write(&data_file, content).map_err(ShopError::Io)?;
        tracing::debug!("saved {} items to {:?}", list.len(), data_file);
        Ok(())
    }
}
