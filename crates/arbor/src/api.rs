//! # API Facade
//!
//! [`TreeStore`] is the explicit store handle handed to UI layers (a shell-like
//! command interpreter, a tree view, an editor). It owns its backend and is a thin
//! facade over the command layer.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Opens** the store, guaranteeing a root directory exists
//! - **Dispatches** each operation to its command module
//! - **Returns structured types** (`Result<Node>`, `Result<Vec<Node>>`, ...)
//!
//! It does not hold any business logic and does not perform any I/O of its own.
//!
//! ## Generic Over StorageBackend
//!
//! `TreeStore<B: StorageBackend>` works with any backend:
//! - Production: [`FileStore`](crate::store::fs::FileStore) (`TreeStore<FsBackend>`)
//! - Testing: [`InMemoryStore`](crate::store::memory::InMemoryStore) (`TreeStore<MemBackend>`)
//!
//! ## Single Writer
//!
//! Operations take `&self` and are meant to be issued one at a time by one caller.
//! There is no locking and no isolation between operations.

use crate::commands::{self, doctor::DoctorReport, StoreOptions};
use crate::error::Result;
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;

pub struct TreeStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    pub(crate) options: StoreOptions,
}

impl<B: StorageBackend> TreeStore<B> {
    /// Open a store over `backend`, creating the root directory if needed.
    ///
    /// Opening an already initialized backend leaves every record untouched.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with_options(backend, StoreOptions::default())
    }

    pub fn open_with_options(backend: B, options: StoreOptions) -> Result<Self> {
        if backend.get(path::ROOT)?.is_none() {
            backend.put(&Node::root())?;
            tracing::info!("initialized empty tree");
        }
        Ok(Self { backend, options })
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give the backend back, closing the store.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// See [`path::resolve`].
    pub fn resolve(&self, current_dir: &str, input: &str) -> String {
        path::resolve(current_dir, input)
    }

    pub fn get(&self, path: &str) -> Result<Option<Node>> {
        commands::get::node(&self.backend, path)
    }

    pub fn exists(&self, path: &str) -> Result<bool> {
        commands::get::exists(&self.backend, path)
    }

    pub fn list(&self, dir: &str) -> Result<Vec<Node>> {
        commands::get::list(&self.backend, dir)
    }

    pub fn get_all(&self) -> Result<Vec<Node>> {
        commands::get::all(&self.backend)
    }

    pub fn create_folder(&self, parent: &str, name: &str) -> Result<Node> {
        commands::create::folder(&self.backend, &self.options, parent, name)
    }

    pub fn create_file(
        &self,
        parent: &str,
        name: &str,
        content: impl Into<String>,
    ) -> Result<Node> {
        commands::create::file(&self.backend, &self.options, parent, name, content.into())
    }

    pub fn update_content(&self, path: &str, content: impl Into<String>) -> Result<Node> {
        commands::update::run(&self.backend, path, content.into())
    }

    /// Delete a node and its subtree. Returns the number of removed nodes.
    pub fn delete(&self, path: &str) -> Result<usize> {
        commands::delete::run(&self.backend, path)
    }

    /// Move or rename a node. Returns the node at its final path.
    pub fn move_node(&self, source: &str, dest: &str) -> Result<Node> {
        commands::move_nodes::run(&self.backend, &self.options, source, dest)
    }

    /// Copy a node and its subtree. Returns the copy of `source`.
    pub fn copy_node(&self, source: &str, dest: &str) -> Result<Node> {
        commands::copy::run(&self.backend, &self.options, source, dest)
    }

    pub fn doctor(&self) -> Result<DoctorReport> {
        commands::doctor::run(&self.backend)
    }
}
