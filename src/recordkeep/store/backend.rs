use crate::error::Result;

/// Abstract interface for the key-value storage medium.
///
/// Each key holds one opaque string blob. Methods take `&self`; backends that
/// keep state use interior mutability since the store is single-threaded.
pub trait StorageBackend {
    /// Read the blob under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`.
    /// MUST be atomic so a failed write never leaves a truncated blob.
    fn set(&self, key: &str, blob: &str) -> Result<()>;
}
