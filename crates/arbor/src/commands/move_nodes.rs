use crate::commands::helpers::{
    collect_subtree, normalize, plan_relocation, require_movable_source, require_parent_dir,
    resolve_destination,
};
use crate::commands::StoreOptions;
use crate::error::{ArborError, Result};
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;

/// Move or rename the node at `source`.
///
/// When `dest` names an existing directory the node moves into it under its own
/// name; otherwise it is relocated to exactly `dest`. Directories carry their whole
/// subtree along: every descendant is written under its new key, then its old key
/// is removed. The source's own old key goes last. Every target key is checked
/// before the first write, so an occupied one fails without touching the store.
pub fn run<B: StorageBackend>(
    backend: &B,
    options: &StoreOptions,
    source: &str,
    dest: &str,
) -> Result<Node> {
    let source = normalize(source);
    let dest = normalize(dest);

    let node = require_movable_source(backend, &source, "move")?;
    let final_path = resolve_destination(backend, &node, &dest, "move")?;

    if final_path == node.path {
        // A file moved onto its own path
        return Ok(node);
    }
    if backend.get(&final_path)?.is_some() {
        return Err(ArborError::AlreadyExists(final_path));
    }
    if options.strict_parents {
        require_parent_dir(backend, &path::parent_of(&final_path))?;
    }

    let subtree = collect_subtree(backend, node)?;
    let plan = plan_relocation(backend, subtree, &source, &final_path)?;
    let Some(((head, head_path), descendants)) = plan.split_first() else {
        return Err(ArborError::NotFound(source));
    };

    let mut moved = head.clone();
    moved.relocate(head_path);
    moved.touch();
    backend.put(&moved)?;

    for (descendant, new_path) in descendants {
        let mut relocated = descendant.clone();
        relocated.relocate(new_path);
        relocated.touch();
        backend.put(&relocated)?;
        backend.delete(&descendant.path)?;
    }

    backend.delete(&source)?;

    tracing::debug!(
        from = %source,
        to = %final_path,
        nodes = plan.len(),
        "moved subtree"
    );
    Ok(moved)
}
