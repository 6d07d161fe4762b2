use crate::error::{Result, ShopError};
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "> ";

/// Configuration for shoplist, stored in <data dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Name of the JSON file holding the list, relative to the data dir
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Save after every command that changes the list
    #[serde(default = "default_autosave")]
    pub autosave: bool,

    /// Prompt printed before each line in interactive mode
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_autosave() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            autosave: default_autosave(),
            prompt: default_prompt(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let name = self.file_name.trim();
        if name.is_empty() || name == CONFIG_FILENAME || name.contains(['/', '\\']) {
            return Err(ShopError::Config(format!(
                "invalid file_name {:?}: must be a plain file name other than {}",
                self.file_name, CONFIG_FILENAME
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.file_name, "shopping_list.json");
        assert!(config.autosave);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ShopConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ShopConfig {
            file_name: "groceries.json".to_string(),
            autosave: false,
            prompt: "cart> ".to_string(),
        };
        config.save(temp_dir.path().join("nested")).unwrap();

        let loaded = ShopConfig::load(temp_dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"autosave": false}"#).unwrap();

        let loaded = ShopConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.autosave);
        assert_eq!(loaded.file_name, "shopping_list.json");
    }

    #[test]
    fn test_rejects_path_like_file_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"file_name": "../list.json"}"#,
        )
        .unwrap();

        assert!(matches!(
            ShopConfig::load(temp_dir.path()),
            Err(ShopError::Config(_))
        ));
    }
}
