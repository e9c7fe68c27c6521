use super::backend::{ParentIndex, StorageBackend};
use crate::error::{ArborError, Result};
use crate::model::Node;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store has a single writer.
/// This keeps the `StorageBackend` trait on `&self` without paying for locks.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<HashMap<String, Node>>,
    index: RefCell<ParentIndex>,
    simulate_write_error: RefCell<bool>,
    writes_before_failure: RefCell<Option<usize>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Let `count` more writes succeed, then fail every write after that.
    /// Used to exercise failures in the middle of recursive operations.
    pub fn fail_after_writes(&self, count: usize) {
        *self.writes_before_failure.borrow_mut() = Some(count);
    }

    /// Test helper: store a record without touching the parent index.
    pub fn put_record_only(&self, node: Node) {
        self.records.borrow_mut().insert(node.path.clone(), node);
    }

    fn check_write(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ArborError::Store("Simulated write error".to_string()));
        }
        let mut budget = self.writes_before_failure.borrow_mut();
        if let Some(remaining) = budget.as_mut() {
            if *remaining == 0 {
                return Err(ArborError::Store("Simulated write error".to_string()));
            }
            *remaining -= 1;
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, path: &str) -> Result<Option<Node>> {
        Ok(self.records.borrow().get(path).cloned())
    }

    fn put(&self, node: &Node) -> Result<()> {
        self.check_write()?;
        let mut records = self.records.borrow_mut();
        let mut index = self.index.borrow_mut();
        if let Some(previous) = records.insert(node.path.clone(), node.clone()) {
            index.remove(&previous);
        }
        index.insert(node);
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<bool> {
        self.check_write()?;
        match self.records.borrow_mut().remove(path) {
            Some(previous) => {
                self.index.borrow_mut().remove(&previous);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_all(&self) -> Result<Vec<Node>> {
        Ok(self.records.borrow().values().cloned().collect())
    }

    fn children(&self, parent: &str) -> Result<Vec<String>> {
        Ok(self.index.borrow().children(parent))
    }

    fn rebuild_index(&self) -> Result<bool> {
        let rebuilt = ParentIndex::from_records(self.records.borrow().values());
        let mut index = self.index.borrow_mut();
        let changed = *index != rebuilt;
        *index = rebuilt;
        Ok(changed)
    }
}
