//! # API Facade
//!
//! `CurioApi` is the single entry point for every catalog operation,
//! regardless of the shell driving it. It is a thin dispatch layer over the
//! command modules: no business logic, no terminal I/O, structured
//! `Result<CmdResult>` returns only.
//!
//! The facade is generic over [`DocumentStore`], so the same API runs
//! against the production `FileStore` or the in-memory store in tests.
//! Path-level operations (open, save, backup, restore) only make sense for
//! a file-backed catalog and live on `CurioApi<FileStore>`.

use crate::commands;
use crate::error::Result;
use crate::model::Field;
use crate::store::fs::FileStore;
use crate::store::DocumentStore;
use std::path::Path;

pub struct CurioApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CurioApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(
        &mut self,
        title: &str,
        year: i32,
        artist: &str,
        style: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, year, artist, style)
    }

    pub fn edit_record(
        &mut self,
        id: u64,
        title: &str,
        year: i32,
        artist: &str,
        style: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, title, year, artist, style)
    }

    pub fn delete_record(
        &mut self,
        id: u64,
        title: &str,
        year: i32,
        artist: &str,
        style: &str,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, title, year, artist, style)
    }

    pub fn search(&self, field: Field, value: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, value)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Reset the catalog to the empty initial state.
    pub fn create(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store)
    }

    /// Historical alias for [`create`](Self::create): resets the document,
    /// it does not remove any file.
    pub fn delete_catalog(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store)
    }

    pub fn export_csv(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }
}

impl CurioApi<FileStore> {
    pub fn open(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.store, path)
    }

    pub fn save(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run(&self.store, path)
    }

    /// Alias for [`save`](Self::save).
    pub fn backup(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run(&self.store, path)
    }

    /// Alias for [`open`](Self::open).
    pub fn restore(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.store, path)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurioError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_search_delete_flow() {
        let mut api = CurioApi::new(InMemoryStore::new());

        let first = api
            .add_record("Starry Night", 1889, "Van Gogh", "Post-Impressionism")
            .unwrap();
        assert_eq!(first.records[0].id, 1);

        let second = api
            .add_record("Guernica", 1937, "Picasso", "Cubism")
            .unwrap();
        assert_eq!(second.records[0].id, 2);

        let found = api.search(Field::Artist, "Picasso").unwrap();
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.records[0].id, 2);

        api.delete_record(2, "Guernica", 1937, "Picasso", "Cubism")
            .unwrap();

        let remaining = api.list_records().unwrap();
        assert_eq!(remaining.records.len(), 1);
        assert_eq!(remaining.records[0].id, 1);
    }

    #[test]
    fn delete_catalog_is_a_full_reset() {
        let mut api = CurioApi::new(InMemoryStore::new());
        api.add_record("Guernica", 1937, "Picasso", "Cubism").unwrap();

        api.delete_catalog().unwrap();

        assert!(api.list_records().unwrap().records.is_empty());
        let after = api.add_record("Guernica", 1937, "Picasso", "Cubism").unwrap();
        assert_eq!(after.records[0].id, 1);
    }

    #[test]
    fn backup_and_restore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("catalog.json"));
        let mut api = CurioApi::new(store);
        api.add_record("Guernica", 1937, "Picasso", "Cubism").unwrap();

        let backup_path = dir.path().join("backup.json");
        api.backup(&backup_path).unwrap();
        api.clear().unwrap();
        assert!(api.list_records().unwrap().records.is_empty());

        let restored = api.restore(&backup_path).unwrap();
        assert_eq!(restored.records.len(), 1);
        assert_eq!(api.list_records().unwrap().records[0].title, "Guernica");
    }

    #[test]
    fn restore_of_missing_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = CurioApi::new(FileStore::new(dir.path().join("catalog.json")));
        let err = api.restore(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CurioError::Io(_)));
    }
}
