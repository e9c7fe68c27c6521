//! # Command Layer
//!
//! This module contains the **tree semantics** of arbor. Each operation lives in its
//! own submodule and is a plain function over a
//! [`StorageBackend`](crate::store::backend::StorageBackend).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Normalize incoming paths
//! - Validate targets (existence, node kind, root protection, self-nesting)
//! - Re-key subtrees on move and copy
//! - Return the persisted [`Node`](crate::model::Node)s
//!
//! Commands never print, never prompt and never retry. A failure is returned to the
//! caller with the offending path.
//!
//! ## Recursive Operations
//!
//! Delete, move and copy select a subtree by path prefix, so nodes below a missing
//! intermediate directory are included. Move and copy refuse up front when any
//! target key is already taken. After that they touch one key at a time and are
//! not transactional: a
//! failure partway through leaves the already processed nodes in their new state.
//! Callers should re-query the tree before retrying, and [`doctor`] can rebuild the
//! parent index afterwards.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run against
//! [`MemBackend`](crate::store::mem_backend::MemBackend) so no filesystem is involved.
//!
//! ## Command Modules
//!
//! - [`create`]: Create files and folders
//! - [`get`]: Lookup, listing and full dumps
//! - [`update`]: Replace file content
//! - [`delete`]: Recursive delete
//! - [`move_nodes`]: Move / rename subtrees
//! - [`copy`]: Duplicate subtrees
//! - [`doctor`]: Verify and repair index consistency
//! - [`helpers`]: Shared utilities (destination resolution, subtree walks)

pub mod copy;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod get;
pub mod helpers;
pub mod move_nodes;
pub mod update;

/// Behavior switches shared by the mutating commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Require the parent of every created, moved or copied node to be an existing
    /// directory. Off by default, which allows nodes under missing parents.
    pub strict_parents: bool,
}

impl StoreOptions {
    pub fn strict() -> Self {
        Self {
            strict_parents: true,
        }
    }
}
