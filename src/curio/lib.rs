//! # Curio Architecture
//!
//! Curio is a **UI-agnostic catalog library**: a record store over a single
//! JSON document, with a CLI client on top. The library has no idea it is
//! driven from a terminal, and the same core could sit behind a desktop form
//! or an HTTP handler unchanged.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs — binary only)                 │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure read-modify-write logic   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Persistence Model
//!
//! The whole catalog is one document: a mapping from composite key
//! (`title + year + artist`) to record, plus a monotonically increasing id
//! counter. Every mutating operation re-reads the full document, applies one
//! change in memory, and rewrites the full document. There is no cache, no
//! locking, and no partial update — simple, and exactly as durable as a
//! whole-file overwrite.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or calls
//! `std::process::exit`.
//!
//! ## Testing Strategy
//!
//! - **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`;
//!   this is where the lion's share of testing lives.
//! - **Storage** (`store/fs.rs`): file round-trips under `tempfile`.
//! - **CLI**: end-to-end tests in `tests/` driving the real binary with
//!   `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Document`, `Field`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
