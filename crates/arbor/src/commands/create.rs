use crate::commands::helpers::{normalize, require_parent_dir};
use crate::commands::StoreOptions;
use crate::error::{ArborError, Result};
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;

pub fn folder<B: StorageBackend>(
    backend: &B,
    options: &StoreOptions,
    parent: &str,
    name: &str,
) -> Result<Node> {
    let parent = normalize(parent);
    insert(backend, options, Node::new_directory(&parent, name), &parent)
}

pub fn file<B: StorageBackend>(
    backend: &B,
    options: &StoreOptions,
    parent: &str,
    name: &str,
    content: String,
) -> Result<Node> {
    let parent = normalize(parent);
    insert(backend, options, Node::new_file(&parent, name, content), &parent)
}

fn insert<B: StorageBackend>(
    backend: &B,
    options: &StoreOptions,
    node: Node,
    parent: &str,
) -> Result<Node> {
    path::validate_name(parent, &node.name)?;

    if backend.get(&node.path)?.is_some() {
        return Err(ArborError::AlreadyExists(node.path));
    }
    if options.strict_parents {
        require_parent_dir(backend, parent)?;
    }

    backend.put(&node)?;
    tracing::debug!(path = %node.path, kind = ?node.kind, "created node");
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use crate::store::mem_backend::MemBackend;

    fn backend() -> MemBackend {
        let backend = MemBackend::new();
        backend.put(&Node::root()).unwrap();
        backend
    }

    #[test]
    fn creates_file_with_empty_content() {
        let backend = backend();
        file(&backend, &StoreOptions::default(), "/", "note.md", String::new()).unwrap();

        let node = backend.get("/note.md").unwrap().unwrap();
        assert_eq!(node.kind, NodeKind::File);
        assert_eq!(node.content, "");
        assert_eq!(node.parent_path, "/");
        assert_eq!(node.created_at, node.updated_at);
    }

    #[test]
    fn creates_nested_folder_and_file() {
        let backend = backend();
        let opts = StoreOptions::default();
        folder(&backend, &opts, "/", "docs").unwrap();
        let node = file(&backend, &opts, "/docs", "a.md", "hi".into()).unwrap();

        assert_eq!(node.path, "/docs/a.md");
        assert_eq!(backend.children("/docs").unwrap(), vec!["/docs/a.md"]);
    }

    #[test]
    fn refuses_to_overwrite() {
        let backend = backend();
        let opts = StoreOptions::default();
        file(&backend, &opts, "/", "note.md", "first".into()).unwrap();

        let again = folder(&backend, &opts, "/", "note.md");
        assert!(matches!(again, Err(ArborError::AlreadyExists(p)) if p == "/note.md"));

        let kept = backend.get("/note.md").unwrap().unwrap();
        assert_eq!(kept.content, "first");
    }

    #[test]
    fn lax_mode_allows_missing_parent() {
        let backend = backend();
        let node = file(&backend, &StoreOptions::default(), "/ghost", "a.md", String::new())
            .unwrap();
        assert_eq!(node.parent_path, "/ghost");
        assert!(backend.get("/ghost").unwrap().is_none());
    }

    #[test]
    fn strict_mode_requires_directory_parent() {
        let backend = backend();
        let strict = StoreOptions::strict();

        let missing = file(&backend, &strict, "/ghost", "a.md", String::new());
        assert!(matches!(missing, Err(ArborError::NotFound(p)) if p == "/ghost"));

        file(&backend, &strict, "/", "plain", String::new()).unwrap();
        let under_file = folder(&backend, &strict, "/plain", "x");
        assert!(matches!(under_file, Err(ArborError::InvalidTarget { .. })));
    }

    #[test]
    fn rejects_malformed_names() {
        let backend = backend();
        let opts = StoreOptions::default();
        for name in ["", "a/b", ".", ".."] {
            let result = folder(&backend, &opts, "/", name);
            assert!(
                matches!(result, Err(ArborError::InvalidTarget { .. })),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn normalizes_parent_path() {
        let backend = backend();
        let opts = StoreOptions::default();
        folder(&backend, &opts, "/", "docs").unwrap();
        let node = file(&backend, &opts, "docs/./", "a.md", String::new()).unwrap();
        assert_eq!(node.path, "/docs/a.md");
    }
}
