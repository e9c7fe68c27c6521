//! # Storage Layer
//!
//! This module defines the persistence abstraction for arbor. The tree lives in a
//! **flat key-value store**: one record per node, keyed by its absolute path, plus a
//! secondary index from parent path to child paths. The [`backend::StorageBackend`]
//! trait is that key-value engine; the tree semantics sit on top of it in
//! [`crate::commands`].
//!
//! ## Why Flat
//!
//! Nodes never point at each other. The tree is rebuilt on demand from the parent
//! index, so there are no cyclic references to manage and every write is a single
//! full record.
//!
//! ## Re-keying
//!
//! The path is the primary key, so a node cannot be renamed in place. Moves and
//! copies write each affected record under its new key; moves then delete the old key.
//!
//! ## Consistency
//!
//! Backends keep the parent index in step with every `put` and `delete`. Recursive
//! operations are a sequence of single-key writes, not one transaction. If one is
//! interrupted, [`crate::commands::doctor`] rebuilds the index from the records.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: JSON data file with atomic writes (production).
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── nodes.json     # { "nodes": { path: record }, "children": { parent: [paths] } }
//! └── arbor.toml     # Optional configuration
//! ```

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
