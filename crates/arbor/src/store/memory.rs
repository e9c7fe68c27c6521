use super::mem_backend::MemBackend;
use crate::api::TreeStore;
use crate::commands::StoreOptions;
use crate::model::Node;

pub type InMemoryStore = TreeStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let backend = MemBackend::new();
        backend.put_record_only(Node::root());
        TreeStore { backend, options }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_folder(self, parent: &str, name: &str) -> Self {
            self.store.create_folder(parent, name).unwrap();
            self
        }

        pub fn with_file(self, parent: &str, name: &str, content: &str) -> Self {
            self.store.create_file(parent, name, content).unwrap();
            self
        }

        /// `/docs` holding `a.md` ("hi") and `sub/b.md` ("deep").
        pub fn with_docs_tree(self) -> Self {
            self.with_folder("/", "docs")
                .with_file("/docs", "a.md", "hi")
                .with_folder("/docs", "sub")
                .with_file("/docs/sub", "b.md", "deep")
        }
    }
}
