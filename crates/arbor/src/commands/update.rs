use crate::commands::helpers::{normalize, require_node};
use crate::error::{ArborError, Result};
use crate::model::Node;
use crate::store::backend::StorageBackend;

/// Replace the content of the file at `path`.
pub fn run<B: StorageBackend>(backend: &B, path: &str, content: String) -> Result<Node> {
    let path = normalize(path);
    let mut node = require_node(backend, &path)?;
    if node.is_dir() {
        return Err(ArborError::invalid_target(path, "cannot edit a directory"));
    }

    node.content = content;
    node.touch();
    backend.put(&node)?;

    tracing::debug!(path = %node.path, bytes = node.content.len(), "updated content");
    Ok(node)
}
