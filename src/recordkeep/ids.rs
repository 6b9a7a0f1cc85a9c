//! Record id minting.
//!
//! Ids are timestamp-derived integers (milliseconds since the epoch), forced
//! strictly increasing so two mints in the same millisecond never collide.
//! The minter is seeded with the largest numeric id already loaded and skips
//! any id the caller reports as taken.

use crate::error::{RecordkeepError, Result};
use crate::model::RecordId;
use chrono::Utc;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct IdMinter {
    last: i64,
}

impl IdMinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A minter whose next id is strictly greater than `last`.
    pub fn starting_after(last: i64) -> Self {
        Self { last }
    }

    /// Raises the floor so later mints exceed `id` when it is numeric.
    pub fn observe(&mut self, id: &RecordId) {
        if let Some(n) = id.as_number() {
            self.last = self.last.max(n);
        }
    }

    /// The next timestamp-derived id, or `None` once the floor is `i64::MAX`.
    pub fn next_raw(&mut self) -> Option<i64> {
        let floor = self.last.checked_add(1)?;
        let id = Utc::now().timestamp_millis().max(floor);
        self.last = id;
        Some(id)
    }

    /// Mints the next id for which `taken` is false.
    ///
    /// Once the timestamp sequence is exhausted, falls back to the smallest
    /// free positive id.
    pub fn mint<F>(&mut self, taken: F) -> Result<RecordId>
    where
        F: Fn(&RecordId) -> bool,
    {
        while let Some(raw) = self.next_raw() {
            let id = RecordId::from(raw);
            if !taken(&id) {
                return Ok(id);
            }
        }

        warn!("Id sequence exhausted, reusing the smallest free id");
        (1..=i64::MAX)
            .map(RecordId::from)
            .find(|id| !taken(id))
            .ok_or_else(|| RecordkeepError::Store("id space exhausted".to_string()))
    }
}
