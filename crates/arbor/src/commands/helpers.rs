use crate::error::{ArborError, Result};
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;

/// Normalize a caller supplied path into a store key.
pub fn normalize(input: &str) -> String {
    path::resolve(path::ROOT, input)
}

pub fn require_node<B: StorageBackend>(backend: &B, path: &str) -> Result<Node> {
    backend
        .get(path)?
        .ok_or_else(|| ArborError::NotFound(path.to_string()))
}

/// Fail unless `parent` is an existing directory.
pub fn require_parent_dir<B: StorageBackend>(backend: &B, parent: &str) -> Result<()> {
    let node = require_node(backend, parent)?;
    if !node.is_dir() {
        return Err(ArborError::invalid_target(parent, "parent is not a directory"));
    }
    Ok(())
}

/// Load `source` for a move or copy, refusing the root.
pub fn require_movable_source<B: StorageBackend>(
    backend: &B,
    source: &str,
    verb: &str,
) -> Result<Node> {
    if path::is_root(source) {
        return Err(ArborError::forbidden(
            source,
            format!("cannot {} the root directory", verb),
        ));
    }
    require_node(backend, source)
}

/// Work out where a move or copy of `source` to `dest` lands.
///
/// - `dest` is an existing directory: the node goes inside it, keeping its name.
/// - `dest` is an existing file: `AlreadyExists`.
/// - `dest` does not exist: the node lands exactly at `dest`.
///
/// Nothing can land below its own path, and a directory cannot land on itself.
pub fn resolve_destination<B: StorageBackend>(
    backend: &B,
    source: &Node,
    dest: &str,
    verb: &str,
) -> Result<String> {
    let final_path = match backend.get(dest)? {
        Some(existing) if existing.is_dir() => path::join(dest, &source.name),
        Some(_) => return Err(ArborError::AlreadyExists(dest.to_string())),
        None => dest.to_string(),
    };

    let lands_below = final_path != source.path && path::is_within(&final_path, &source.path);
    if lands_below || (source.is_dir() && final_path == source.path) {
        return Err(ArborError::invalid_target(
            final_path,
            format!("cannot {} a node into itself", verb),
        ));
    }

    Ok(final_path)
}

/// Collect `root` and every node whose path lies below it, parents before children.
///
/// Descendants are matched by path prefix, not through the parent index, so nodes
/// hanging under a missing intermediate directory are included.
pub fn collect_subtree<B: StorageBackend>(backend: &B, root: Node) -> Result<Vec<Node>> {
    let mut descendants: Vec<Node> = backend
        .get_all()?
        .into_iter()
        .filter(|n| n.path != root.path && path::is_within(&n.path, &root.path))
        .collect();
    descendants.sort_by(|a, b| {
        path::depth(&a.path)
            .cmp(&path::depth(&b.path))
            .then_with(|| a.path.cmp(&b.path))
    });

    let mut subtree = Vec::with_capacity(descendants.len() + 1);
    subtree.push(root);
    subtree.extend(descendants);
    Ok(subtree)
}

/// Pair each node of `subtree` with the path it takes once `source` is re-rooted
/// at `final_path`.
///
/// Nothing is written. Fails with `AlreadyExists` naming the first target path
/// that already holds a record.
pub fn plan_relocation<B: StorageBackend>(
    backend: &B,
    subtree: Vec<Node>,
    source: &str,
    final_path: &str,
) -> Result<Vec<(Node, String)>> {
    let mut plan = Vec::with_capacity(subtree.len());
    for node in subtree {
        let Some(target) = path::rebase(&node.path, source, final_path) else {
            continue;
        };
        if backend.get(&target)?.is_some() {
            return Err(ArborError::AlreadyExists(target));
        }
        plan.push((node, target));
    }
    Ok(plan)
}
