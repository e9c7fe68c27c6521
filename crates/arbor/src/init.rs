//! # Initialization
//!
//! [`initialize`] opens the persisted store for a data directory and hands back an
//! explicit [`StoreContext`]. There is no global handle: the caller owns the context
//! and passes the store to whatever needs it.
//!
//! ## Data Directory Resolution
//!
//! 1. The `data_override` argument, when given.
//! 2. The `ARBOR_DATA_DIR` environment variable (primarily for testing).
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! ## Idempotency
//!
//! Initializing the same directory again reopens the same tree. The root directory
//! is created on first use only; existing records are never rewritten.

use crate::config::ArborConfig;
use crate::error::{ArborError, Result};
use crate::logging;
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ARBOR_DATA_DIR";

pub struct StoreContext {
    pub store: FileStore,
    pub config: ArborConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "arbor", "arbor")
}

/// Pick the data directory: explicit override, then `ARBOR_DATA_DIR`, then the OS default.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ArborError::Config("Could not determine a data directory".to_string()))
}

/// Load `arbor.toml` from the user config directory and the data directory.
///
/// The data directory wins over the user config. Unreadable configuration falls
/// back to the defaults.
pub fn load_config(data_dir: &Path) -> ArborConfig {
    let mut search_paths = Vec::new();
    if let Some(dirs) = project_dirs() {
        search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    search_paths.push(SearchPath::Path(data_dir.to_path_buf()));

    Clapfig::builder::<ArborConfig>()
        .app_name("arbor")
        .file_name("arbor.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Open the file-backed store, creating the data directory and root as needed.
///
/// Also installs the stderr logger at the configured `log_level` unless a global
/// subscriber is already in place.
pub fn initialize(data_override: Option<PathBuf>) -> Result<StoreContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    logging::init_logging(&config.log_level)?;

    let store = FileStore::open_dir_with(
        data_dir.clone(),
        config.data_file(),
        config.store_options(),
    )?;
    tracing::info!(data_dir = %data_dir.display(), "store ready");

    Ok(StoreContext {
        store,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_override_wins() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_data_dir(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn initialize_creates_root_and_data_file() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();

        assert!(ctx.store.get("/").unwrap().unwrap().is_dir());
        assert!(temp.path().join("nodes.json").exists());
        assert_eq!(ctx.data_dir, temp.path());
    }

    #[test]
    fn initialize_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let first = initialize(Some(temp.path().to_path_buf())).unwrap();
        first.store.create_folder("/", "docs").unwrap();
        let root = first.store.get("/").unwrap().unwrap();

        let second = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(second.store.get("/").unwrap().unwrap(), root);
        assert_eq!(second.store.get_all().unwrap().len(), 2);
    }

    #[test]
    fn store_config_is_applied() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("arbor.toml"),
            "data_file = \"tree.json\"\nstrict_parents = true\nlog_level = \"arbor=debug\"\n",
        )
        .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert!(ctx.config.strict_parents);
        assert_eq!(ctx.config.log_level, "arbor=debug");
        assert!(ctx.store.options().strict_parents);
        assert!(temp.path().join("tree.json").exists());
    }
}
