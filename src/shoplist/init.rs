use crate::api::ShopApi;
use crate::config::ShopConfig;
use crate::error::{Result, ShopError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "SHOPLIST_HOME";

pub struct ShopContext {
    pub api: ShopApi<FileStore>,
    pub config: ShopConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: explicit path, then `SHOPLIST_HOME`, then the
/// platform data dir (e.g. `~/.local/share/shoplist` on Linux).
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shoplist", "shoplist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: Option<&Path>) -> Result<ShopContext> {
    let data_dir = resolve_data_dir(data_dir)?;
    let config = ShopConfig::load(&data_dir)?;
    tracing::debug!("using data dir {:?} with {:?}", data_dir, config);

    let store = FileStore::new(data_dir.clone()).with_file_name(&config.file_name);
    let api = ShopApi::open(store, config.autosave)?;

    Ok(ShopContext {
        api,
        config,
        data_dir,
    })
}
