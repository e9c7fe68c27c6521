use super::backend::{ParentIndex, StorageBackend};
use crate::error::{ArborError, Result};
use crate::model::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "nodes.json";

/// On-disk layout of the data file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    nodes: BTreeMap<String, Node>,
    #[serde(default)]
    children: ParentIndex,
}

/// JSON file backend.
///
/// All records and the parent index live in one data file. Every mutation loads
/// the file, applies the change and writes it back atomically (temp file + rename),
/// so a crash never leaves a half-written data file behind.
pub struct FsBackend {
    data_dir: PathBuf,
    data_file: String,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ArborError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<StoreFile> {
        let path = self.data_file_path();
        if !path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(path).map_err(ArborError::Io)?;
        let file: StoreFile = serde_json::from_str(&content).map_err(ArborError::Serialization)?;
        Ok(file)
    }

    fn save(&self, file: &StoreFile) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        let content = serde_json::to_string_pretty(file).map_err(ArborError::Serialization)?;

        // Atomic write
        let tmp_file = self.data_dir.join(format!(".nodes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ArborError::Io)?;
        fs::rename(&tmp_file, self.data_file_path()).map_err(ArborError::Io)?;

        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, path: &str) -> Result<Option<Node>> {
        Ok(self.load()?.nodes.remove(path))
    }

    fn put(&self, node: &Node) -> Result<()> {
        let mut file = self.load()?;
        if let Some(previous) = file.nodes.insert(node.path.clone(), node.clone()) {
            file.children.remove(&previous);
        }
        file.children.insert(node);
        self.save(&file)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        let mut file = self.load()?;
        let Some(previous) = file.nodes.remove(path) else {
            return Ok(false);
        };
        file.children.remove(&previous);
        self.save(&file)?;
        Ok(true)
    }

    fn get_all(&self) -> Result<Vec<Node>> {
        Ok(self.load()?.nodes.into_values().collect())
    }

    fn children(&self, parent: &str) -> Result<Vec<String>> {
        Ok(self.load()?.children.children(parent))
    }

    fn rebuild_index(&self) -> Result<bool> {
        let mut file = self.load()?;
        let rebuilt = ParentIndex::from_records(file.nodes.values());
        if rebuilt == file.children {
            return Ok(false);
        }
        file.children = rebuilt;
        self.save(&file)?;
        Ok(true)
    }
}
