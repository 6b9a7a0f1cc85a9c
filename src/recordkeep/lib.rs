//! # Recordkeep Architecture
//!
//! Recordkeep is a **UI-agnostic record store**: a small local collection of
//! credential-like records (type, login, password, marks), persisted as one
//! blob in a key-value medium. The `recordkeep` binary is just one consumer.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Consumer (cli/, wired by main.rs; or any UI)               │
//! │  - Reads records(), edits raw marks, calls operations       │
//! │  - Subscribes to StoreEvent to refresh its view             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/record_store.rs)                       │
//! │  - Sole owner of the in-memory collection                   │
//! │  - Raw mark <-> marks transform (model.rs)                  │
//! │  - Decides when the collection is flushed                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Medium (store/backend.rs) + Codec (codec.rs)       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! │  - JSON array of records under a single key                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Hidden State
//!
//! There is no global store. A consumer builds one [`store::RecordStore`] at
//! startup and passes it around by reference. Nothing below the consumer writes
//! to stdout/stderr or exits the process; diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`model`]: `Record`, `Mark`, `RecordId`, `RecordType`, raw mark handling
//! - [`store`]: the record store and storage backends
//! - [`codec`]: JSON encoding of the collection
//! - [`ids`]: timestamp-derived id minting
//! - [`events`]: change subscriptions
//! - [`config`]: configuration management
//! - [`error`]: Error types

pub mod codec;
pub mod config;
pub mod error;
pub mod events;
pub mod ids;
pub mod model;
pub mod store;
