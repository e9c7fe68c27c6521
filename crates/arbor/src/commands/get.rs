use crate::commands::helpers::normalize;
use crate::error::Result;
use crate::model::Node;
use crate::store::backend::StorageBackend;

pub fn node<B: StorageBackend>(backend: &B, path: &str) -> Result<Option<Node>> {
    backend.get(&normalize(path))
}

pub fn exists<B: StorageBackend>(backend: &B, path: &str) -> Result<bool> {
    Ok(node(backend, path)?.is_some())
}

/// Direct children of `dir`, directories first, then by name.
///
/// A missing path or a file yields an empty list. Callers that need to tell
/// "empty directory" apart from "no directory" should check with [`node`] first.
pub fn list<B: StorageBackend>(backend: &B, dir: &str) -> Result<Vec<Node>> {
    let dir = normalize(dir);
    match backend.get(&dir)? {
        Some(node) if node.is_dir() => {}
        _ => return Ok(Vec::new()),
    }

    let mut children = Vec::new();
    for child_path in backend.children(&dir)? {
        if let Some(child) = backend.get(&child_path)? {
            children.push(child);
        }
    }
    children.sort_by(Node::listing_order);
    Ok(children)
}

/// Every node in the store, ordered by path.
pub fn all<B: StorageBackend>(backend: &B) -> Result<Vec<Node>> {
    let mut nodes = backend.get_all()?;
    nodes.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(nodes)
}
