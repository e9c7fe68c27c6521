use crate::error::Result;
use crate::model::Node;
use crate::path;
use crate::store::backend::StorageBackend;
use std::collections::HashMap;

/// Report from the `doctor` operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    /// The root directory was missing and has been recreated.
    pub root_recreated: bool,
    /// The parent index disagreed with the records and has been rebuilt.
    pub index_repaired: bool,
    /// Non-root nodes whose parent is missing or is not a directory.
    pub orphans: Vec<String>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        !self.root_recreated && !self.index_repaired && self.orphans.is_empty()
    }
}

/// Verify and repair store consistency.
///
/// Recreates a missing root and rebuilds the parent index from the records, which
/// is what an interrupted recursive operation typically leaves behind. Orphans are
/// reported, never deleted.
pub fn run<B: StorageBackend>(backend: &B) -> Result<DoctorReport> {
    let mut report = DoctorReport::default();

    if backend.get(path::ROOT)?.is_none() {
        backend.put(&Node::root())?;
        report.root_recreated = true;
        tracing::warn!("root directory was missing, recreated");
    }

    report.index_repaired = backend.rebuild_index()?;
    if report.index_repaired {
        tracing::warn!("parent index was out of sync, rebuilt");
    }

    let nodes = backend.get_all()?;
    let kinds: HashMap<&str, bool> = nodes
        .iter()
        .map(|n| (n.path.as_str(), n.is_dir()))
        .collect();

    report.orphans = nodes
        .iter()
        .filter(|n| !n.is_root())
        .filter(|n| kinds.get(n.parent_path.as_str()) != Some(&true))
        .map(|n| n.path.clone())
        .collect();
    report.orphans.sort();

    for orphan in &report.orphans {
        tracing::warn!(path = %orphan, "orphaned node");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn clean_store_reports_nothing() {
        let backend = MemBackend::new();
        backend.put(&Node::root()).unwrap();
        backend.put(&Node::new_directory("/", "docs")).unwrap();
        backend
            .put(&Node::new_file("/docs", "a.md", String::new()))
            .unwrap();

        let report = run(&backend).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn recreates_missing_root() {
        let backend = MemBackend::new();
        let report = run(&backend).unwrap();
        assert!(report.root_recreated);
        assert!(backend.get("/").unwrap().unwrap().is_dir());
    }

    #[test]
    fn rebuilds_drifted_index() {
        let backend = MemBackend::new();
        backend.put(&Node::root()).unwrap();
        backend.put_record_only(Node::new_directory("/", "docs"));

        let report = run(&backend).unwrap();
        assert!(report.index_repaired);
        assert_eq!(backend.children("/").unwrap(), vec!["/docs"]);
    }

    #[test]
    fn reports_orphans_without_removing_them() {
        let backend = MemBackend::new();
        backend.put(&Node::root()).unwrap();
        backend.put(&Node::new_file("/", "plain", String::new())).unwrap();
        backend
            .put(&Node::new_file("/plain", "under-file", String::new()))
            .unwrap();
        backend
            .put(&Node::new_file("/ghost", "a.md", String::new()))
            .unwrap();

        let report = run(&backend).unwrap();
        assert_eq!(report.orphans, vec!["/ghost/a.md", "/plain/under-file"]);
        assert!(backend.get("/ghost/a.md").unwrap().is_some());
    }
}
