//! # Domain Model
//!
//! A [`Node`] is one file or directory record, keyed by its absolute path. The tree is
//! never stored as linked nodes: it is rebuilt on demand from each record's
//! `parent_path`, which the storage backends index.
//!
//! ## Persisted Record Shape
//!
//! Records are serialized with stable camelCase field names:
//!
//! ```text
//! { "path", "name", "kind", "content", "parentPath", "createdAt", "updatedAt" }
//! ```
//!
//! Any change to this shape must keep these fields or ship a migration that rewrites
//! every existing record.
//!
//! ## Invariants
//!
//! - `path == join(parent_path, name)`; the root is `path == "/"`, `name == "/"`,
//!   `parent_path == ""`.
//! - Directories always carry empty content.
//! - `updated_at` never moves backwards and is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub content: String,
    pub parent_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Node {
    pub fn root() -> Self {
        let now = Utc::now();
        Self {
            path: path::ROOT.to_string(),
            name: path::ROOT.to_string(),
            kind: NodeKind::Directory,
            content: String::new(),
            parent_path: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_file(parent_path: &str, name: &str, content: String) -> Self {
        Self::build(parent_path, name, NodeKind::File, content)
    }

    pub fn new_directory(parent_path: &str, name: &str) -> Self {
        Self::build(parent_path, name, NodeKind::Directory, String::new())
    }

    fn build(parent_path: &str, name: &str, kind: NodeKind, content: String) -> Self {
        let now = Utc::now();
        Self {
            path: path::join(parent_path, name),
            name: name.to_string(),
            kind,
            content,
            parent_path: if parent_path.is_empty() {
                path::ROOT.to_string()
            } else {
                parent_path.to_string()
            },
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    pub fn is_root(&self) -> bool {
        path::is_root(&self.path)
    }

    /// Bump `updated_at` to now, never earlier than its current value.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Re-key this record under `new_path`, deriving name and parent from it.
    pub fn relocate(&mut self, new_path: &str) {
        self.path = new_path.to_string();
        self.name = path::name_of(new_path);
        self.parent_path = path::parent_of(new_path);
    }

    /// Listing order: directories before files, then byte-wise by name.
    pub fn listing_order(a: &Node, b: &Node) -> Ordering {
        match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_file_derives_path_and_parent() {
        let node = Node::new_file("/docs", "a.md", "hi".into());
        assert_eq!(node.path, "/docs/a.md");
        assert_eq!(node.name, "a.md");
        assert_eq!(node.parent_path, "/docs");
        assert_eq!(node.kind, NodeKind::File);
        assert_eq!(node.created_at, node.updated_at);
    }

    #[test]
    fn new_directory_under_root() {
        let node = Node::new_directory("/", "docs");
        assert_eq!(node.path, "/docs");
        assert_eq!(node.parent_path, "/");
        assert!(node.content.is_empty());
        assert!(node.is_dir());
    }

    #[test]
    fn root_uses_sentinels() {
        let root = Node::root();
        assert!(root.is_root());
        assert_eq!(root.name, "/");
        assert_eq!(root.parent_path, "");
    }

    #[test]
    fn touch_never_moves_backwards() {
        let mut node = Node::new_file("/", "a", String::new());
        let future = Utc::now() + Duration::hours(1);
        node.updated_at = future;
        node.touch();
        assert_eq!(node.updated_at, future);
    }

    #[test]
    fn relocate_rederives_fields() {
        let mut node = Node::new_file("/docs", "a.md", "hi".into());
        node.relocate("/archive/b.md");
        assert_eq!(node.path, "/archive/b.md");
        assert_eq!(node.name, "b.md");
        assert_eq!(node.parent_path, "/archive");
        assert_eq!(node.content, "hi");
    }

    #[test]
    fn listing_order_puts_directories_first() {
        let mut nodes = vec![
            Node::new_file("/", "b.md", String::new()),
            Node::new_directory("/", "z"),
            Node::new_file("/", "A.md", String::new()),
            Node::new_directory("/", "a"),
        ];
        nodes.sort_by(Node::listing_order);
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "z", "A.md", "b.md"]);
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let node = Node::new_file("/", "note.md", "x".into());
        let value = serde_json::to_value(&node).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "path",
            "name",
            "kind",
            "content",
            "parentPath",
            "createdAt",
            "updatedAt",
        ] {
            assert!(obj.contains_key(key), "missing field {}", key);
        }
        assert_eq!(obj["kind"], "File");
    }
}
