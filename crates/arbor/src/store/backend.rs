use crate::error::Result;
use crate::model::Node;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Abstract interface for the flat key-value persistence engine.
///
/// Records are keyed by their normalized path. Every write replaces a full record.
/// Implementations must keep the parent index in step with `put` and `delete`, so
/// `children` always reflects the records currently stored.
///
/// This trait handles the "how" of storage (filesystem vs memory), while the
/// command layer handles the "what" (tree semantics, re-keying, validation).
pub trait StorageBackend {
    /// Fetch the record stored under `path`.
    fn get(&self, path: &str) -> Result<Option<Node>>;

    /// Insert or replace the record keyed by `node.path`.
    fn put(&self, node: &Node) -> Result<()>;

    /// Remove the record stored under `path`. Returns false if there was none.
    fn delete(&self, path: &str) -> Result<bool>;

    /// Every record in the store, in no particular order.
    fn get_all(&self) -> Result<Vec<Node>>;

    /// Paths of the records whose `parent_path` is `parent`, from the secondary index.
    fn children(&self, parent: &str) -> Result<Vec<String>>;

    /// Recompute the parent index from the records.
    /// Returns true if the stored index differed from the recomputed one.
    fn rebuild_index(&self) -> Result<bool>;
}

/// Secondary index from parent path to the set of child paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ParentIndex {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut index = Self::default();
        for node in records {
            index.insert(node);
        }
        index
    }

    /// Register `node` under its parent. The root has no parent and is skipped.
    pub fn insert(&mut self, node: &Node) {
        if node.parent_path.is_empty() {
            return;
        }
        self.entries
            .entry(node.parent_path.clone())
            .or_default()
            .insert(node.path.clone());
    }

    pub fn remove(&mut self, node: &Node) {
        if let Some(children) = self.entries.get_mut(&node.parent_path) {
            children.remove(&node.path);
            if children.is_empty() {
                self.entries.remove(&node.parent_path);
            }
        }
    }

    pub fn children(&self, parent: &str) -> Vec<String> {
        self.entries
            .get(parent)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}
