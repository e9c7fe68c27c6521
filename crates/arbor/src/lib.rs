//! # Arbor Architecture
//!
//! Arbor is a **hierarchical document store** addressed by filesystem-like paths
//! (`/docs/notes/today.md`), kept in a flat key-value backend. It is a library: shells,
//! tree views and editors are clients that call the store and render the results.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TreeStore: explicit store handle, thin facade            │
//! │  - Guarantees the root directory exists on open             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Tree semantics: create, update, delete, move, copy       │
//! │  - Validation and subtree re-keying                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: flat KV + parent index             │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`path`] sits beside the layers: pure path arithmetic with no storage access.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Node>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** retries on its own
//!
//! ## Example
//!
//! ```
//! use arbor::store::memory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.create_folder("/", "docs").unwrap();
//! store.create_file("/docs", "a.md", "hi").unwrap();
//! store.move_node("/docs", "/archive").unwrap();
//!
//! assert_eq!(store.get("/archive/a.md").unwrap().unwrap().content, "hi");
//! assert!(store.get("/docs").unwrap().is_none());
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The store handle, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Key-value backends
//! - [`model`]: Core data types (`Node`, `NodeKind`)
//! - [`path`]: Path resolution and arithmetic
//! - [`init`]: Opening the file-backed store for a data directory
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod path;
pub mod store;

pub use api::TreeStore;
pub use error::{ArborError, Result};
pub use model::{Node, NodeKind};
