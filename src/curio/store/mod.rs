//! # Storage Layer
//!
//! The [`DocumentStore`] trait is the seam between the command layer and
//! persistence. There is deliberately no finer-grained interface: every
//! operation in curio is a whole-document read-modify-write, so the store
//! only knows how to load and replace the full [`Document`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per catalog.
//!   A missing file reads as an empty document; writes replace the file
//!   wholesale. No locking and no partial-write recovery — a crash mid-write
//!   can truncate the catalog (accepted risk).
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence,
//!   no filesystem.
//!
//! Commands never cache the document between calls; each call re-reads from
//! the store so two operations on the same store always agree with what is
//! on disk.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface over the single-document catalog state.
pub trait DocumentStore {
    /// Read the entire document. An empty backing store yields the default
    /// document (`records = {}`, `next_id = 1`).
    fn load(&self) -> Result<Document>;

    /// Replace the entire document.
    fn store(&mut self, doc: &Document) -> Result<()>;
}
