use crate::commands::helpers::{collect_subtree, normalize, require_node};
use crate::error::{ArborError, Result};
use crate::path;
use crate::store::backend::StorageBackend;

/// Delete the node at `path` and, for directories, everything below it.
///
/// Descendants are removed before their parents. Returns the number of removed
/// nodes. A failing key deletion stops the walk; nodes removed before it stay removed.
pub fn run<B: StorageBackend>(backend: &B, path: &str) -> Result<usize> {
    let path = normalize(path);
    if path::is_root(&path) {
        return Err(ArborError::forbidden(path, "cannot delete the root directory"));
    }

    let node = require_node(backend, &path)?;
    let subtree = collect_subtree(backend, node)?;

    let mut removed = 0;
    for node in subtree.iter().rev() {
        if backend.delete(&node.path)? {
            removed += 1;
        }
    }

    tracing::debug!(path = %path, removed, "deleted subtree");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::store::mem_backend::MemBackend;

    fn seeded() -> MemBackend {
        let backend = MemBackend::new();
        for node in [
            Node::root(),
            Node::new_directory("/", "docs"),
            Node::new_file("/docs", "a.md", "hi".into()),
            Node::new_directory("/docs", "sub"),
            Node::new_file("/docs/sub", "b.md", String::new()),
            Node::new_directory("/", "docs2"),
            Node::new_file("/docs2", "keep.md", String::new()),
        ] {
            backend.put(&node).unwrap();
        }
        backend
    }

    #[test]
    fn removes_whole_subtree() {
        let backend = seeded();
        assert_eq!(run(&backend, "/docs").unwrap(), 4);

        for gone in ["/docs", "/docs/a.md", "/docs/sub", "/docs/sub/b.md"] {
            assert!(backend.get(gone).unwrap().is_none(), "{} should be gone", gone);
        }
        assert!(backend.get("/docs2/keep.md").unwrap().is_some());
        assert_eq!(backend.children("/").unwrap(), vec!["/docs2"]);
    }

    #[test]
    fn removes_descendants_under_missing_directories() {
        let backend = seeded();
        backend
            .put(&Node::new_file("/docs/ghost", "y.md", "orphan".into()))
            .unwrap();

        assert_eq!(run(&backend, "/docs").unwrap(), 5);
        let left: Vec<String> = backend
            .get_all()
            .unwrap()
            .into_iter()
            .map(|n| n.path)
            .filter(|p| path::is_within(p, "/docs"))
            .collect();
        assert!(left.is_empty(), "left behind: {:?}", left);
        assert!(backend.get("/docs2/keep.md").unwrap().is_some());
    }

    #[test]
    fn removes_single_file() {
        let backend = seeded();
        assert_eq!(run(&backend, "/docs/a.md").unwrap(), 1);
        assert!(backend.get("/docs/a.md").unwrap().is_none());
        assert!(backend.get("/docs").unwrap().is_some());
    }

    #[test]
    fn root_is_forbidden() {
        let backend = seeded();
        assert!(matches!(run(&backend, "/"), Err(ArborError::Forbidden { .. })));
        assert!(matches!(run(&backend, "/docs/.."), Err(ArborError::Forbidden { .. })));
        assert!(backend.get("/").unwrap().is_some());
    }

    #[test]
    fn missing_is_not_found() {
        let backend = seeded();
        assert!(matches!(run(&backend, "/nope"), Err(ArborError::NotFound(_))));
    }

    #[test]
    fn failure_midway_keeps_progress() {
        let backend = seeded();
        backend.fail_after_writes(2);

        assert!(run(&backend, "/docs").is_err());

        let remaining = backend
            .get_all()
            .unwrap()
            .into_iter()
            .filter(|n| path::is_within(&n.path, "/docs"))
            .count();
        assert_eq!(remaining, 2);
        assert!(backend.get("/docs").unwrap().is_some());
    }
}
