use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory document store for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.doc.clone())
    }

    fn store(&mut self, doc: &Document) -> Result<()> {
        self.doc = doc.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::add;

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

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Work {}", i + 1);
                let artist = format!("Artist {}", i + 1);
                add::run(&mut self.store, &title, 1900 + i as i32, &artist, "Test").unwrap();
            }
            self
        }

        pub fn with_record(mut self, title: &str, year: i32, artist: &str, style: &str) -> Self {
            add::run(&mut self.store, title, year, artist, style).unwrap();
            self
        }
    }
}
