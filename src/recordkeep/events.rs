//! Change notifications for store consumers.
//!
//! A consumer that renders the collection subscribes once and re-reads
//! [`crate::store::record_store::RecordStore::records`] when an event arrives.
//! Listeners run synchronously on the caller's thread, after the in-memory
//! change and after any persist has succeeded.

use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loaded { count: usize },
    Added { id: RecordId },
    Removed { id: RecordId, removed: usize },
    Updated { id: RecordId, found: bool },
    Saved { count: usize },
}

pub type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct Listeners {
    next: u64,
    entries: Vec<(Subscription, Listener)>,
}

impl Listeners {
    pub fn subscribe(&mut self, listener: Listener) -> Subscription {
        let handle = Subscription(self.next);
        self.next += 1;
        self.entries.push((handle, listener));
        handle
    }

    /// Returns false if the handle was not registered.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
