//! # Storage Layer
//!
//! This module holds the record store and the storage medium it persists to.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how". An opaque key-value medium that
//!   gets and sets a single string blob per key.
//! - [`record_store::RecordStore`]: the "what". Owns the in-memory collection,
//!   the raw mark transform, and decides when the collection is flushed.
//!
//! ## Persistence Rules
//!
//! The whole collection is written as one blob on every flush. There are no
//! partial writes and no per-record keys.
//!
//! | Operation | Mutates memory | Flushes |
//! |-----------|----------------|---------|
//! | `load` | replaces collection | no |
//! | `save` | re-derives marks, clears raw marks | yes |
//! | `add` / `add_empty` | appends | **no** |
//! | `remove` | filters by id | yes (even on no match) |
//! | `update` | replaces by id | yes (even on no match) |
//!
//! `add` staging without a flush lets a consumer create a record, let the user
//! fill it in, and persist it with the following `update` or `save`.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per key in a data directory.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.
//! - [`memory::InMemoryStore`]: `RecordStore<MemBackend>` plus test fixtures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── recordkeep.toml     # Optional configuration
//! └── records.json        # The record collection (key "records")
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::RecordStore;
