use crate::commands::helpers::{
    collect_subtree, normalize, plan_relocation, require_movable_source, require_parent_dir,
    resolve_destination,
};
use crate::commands::StoreOptions;
use crate::error::{ArborError, Result};
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;
use chrono::Utc;

/// Duplicate the node at `source`, and its subtree, under the resolved destination.
///
/// Destination rules match [`move_nodes`](super::move_nodes). The source is left
/// untouched. Copies are new nodes: content is kept verbatim, timestamps are fresh.
pub fn run<B: StorageBackend>(
    backend: &B,
    options: &StoreOptions,
    source: &str,
    dest: &str,
) -> Result<Node> {
    let source = normalize(source);
    let dest = normalize(dest);

    let node = require_movable_source(backend, &source, "copy")?;
    let final_path = resolve_destination(backend, &node, &dest, "copy")?;

    if backend.get(&final_path)?.is_some() {
        return Err(ArborError::AlreadyExists(final_path));
    }
    if options.strict_parents {
        require_parent_dir(backend, &path::parent_of(&final_path))?;
    }

    let subtree = collect_subtree(backend, node)?;
    let plan = plan_relocation(backend, subtree, &source, &final_path)?;
    let now = Utc::now();
    let mut copied_root = None;

    for (original, new_path) in &plan {
        let mut copy = original.clone();
        copy.relocate(new_path);
        copy.created_at = now;
        copy.updated_at = now;
        backend.put(&copy)?;

        if copied_root.is_none() {
            copied_root = Some(copy);
        }
    }

    tracing::debug!(from = %source, to = %final_path, nodes = plan.len(), "copied subtree");
    copied_root.ok_or(ArborError::NotFound(source))
}
