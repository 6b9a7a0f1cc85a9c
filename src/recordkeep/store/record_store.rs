use super::backend::StorageBackend;
use crate::codec::JsonCodec;
use crate::config::{CorruptBlobPolicy, RecordkeepConfig, DEFAULT_STORAGE_KEY};
use crate::error::{RecordkeepError, Result};
use crate::events::{Listeners, StoreEvent, Subscription};
use crate::ids::IdMinter;
use crate::model::{derive_marks, EditableRecord, Record, RecordDraft, RecordId, RecordType};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Owner of the in-memory record collection and its persisted blob.
///
/// Construct one per session and hand it to consumers by reference.
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    records: Vec<EditableRecord>,
    storage_key: String,
    codec: JsonCodec,
    on_corrupt: CorruptBlobPolicy,
    minter: IdMinter,
    listeners: Listeners,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            codec: JsonCodec::default(),
            on_corrupt: CorruptBlobPolicy::default(),
            minter: IdMinter::new(),
            listeners: Listeners::default(),
        }
    }

    pub fn from_config(backend: B, config: &RecordkeepConfig) -> Self {
        Self::with_backend(backend)
            .with_storage_key(&config.storage_key)
            .with_codec(JsonCodec::new(config.pretty))
            .with_corrupt_policy(config.on_corrupt)
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn with_codec(mut self, codec: JsonCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptBlobPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    pub fn with_minter(mut self, minter: IdMinter) -> Self {
        self.minter = minter;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // --- Read Access ---

    pub fn records(&self) -> &[EditableRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&EditableRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Mutable access for in-place editing (typically of `raw_mark`).
    /// Changes reach storage on the next flushing operation.
    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut EditableRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // --- Subscriptions ---

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.listeners.unsubscribe(handle)
    }

    // --- Lifecycle ---

    /// Replaces the collection with the persisted blob.
    ///
    /// A missing blob yields an empty collection. A blob that fails to decode
    /// is handled per the configured [`CorruptBlobPolicy`]: `Fail` returns the
    /// error and leaves the collection untouched, `Reset` empties it.
    pub fn load(&mut self) -> Result<()> {
        let records = match self.backend.get(&self.storage_key)? {
            None => {
                debug!(key = %self.storage_key, "No stored records, starting empty");
                Vec::new()
            }
            Some(blob) => match self.codec.decode(&blob) {
                Ok(records) => records,
                Err(err) => match self.on_corrupt {
                    CorruptBlobPolicy::Fail => return Err(err),
                    CorruptBlobPolicy::Reset => {
                        warn!(key = %self.storage_key, error = %err, "Stored records are malformed, starting empty");
                        Vec::new()
                    }
                },
            },
        };

        {
            let mut seen = HashSet::new();
            for record in &records {
                self.minter.observe(&record.id);
                if !seen.insert(&record.id) {
                    warn!(id = %record.id, "Stored records contain a duplicate id");
                }
            }
        }

        self.records = records
            .into_iter()
            .map(EditableRecord::from_persisted)
            .collect();

        info!(count = self.records.len(), "Loaded records");
        self.listeners.emit(&StoreEvent::Loaded {
            count: self.records.len(),
        });
        Ok(())
    }

    /// Flushes pending raw marks into marks and writes the whole collection.
    pub fn save(&mut self) -> Result<()> {
        for record in self.records.iter_mut() {
            record.flush_marks();
        }

        let persisted: Vec<Record> = self.records.iter().map(|r| r.record.clone()).collect();
        let blob = self.codec.encode(&persisted)?;
        self.backend.set(&self.storage_key, &blob)?;

        debug!(count = persisted.len(), bytes = blob.len(), "Saved records");
        self.listeners.emit(&StoreEvent::Saved {
            count: persisted.len(),
        });
        Ok(())
    }

    /// Stages a record: derives its marks from its raw mark and appends it.
    ///
    /// Does not persist. Fails if a record with the same id is already held.
    pub fn add(&mut self, mut record: EditableRecord) -> Result<()> {
        if self.get(record.id()).is_some() {
            return Err(RecordkeepError::DuplicateId(record.id().clone()));
        }
        self.minter.observe(record.id());
        record.record.marks = derive_marks(record.raw_mark.as_deref());

        let id = record.id().clone();
        debug!(%id, "Added record");
        self.records.push(record);
        self.listeners.emit(&StoreEvent::Added { id });
        Ok(())
    }

    /// Drops every record with this id, then persists.
    pub fn remove(&mut self, id: &RecordId) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = before - self.records.len();

        self.save()?;

        debug!(%id, removed, "Removed record");
        self.listeners.emit(&StoreEvent::Removed {
            id: id.clone(),
            removed,
        });
        Ok(())
    }

    /// Replaces the record with the draft's id, then persists.
    ///
    /// An unknown id leaves the collection unchanged; it is still persisted.
    pub fn update(&mut self, draft: RecordDraft) -> Result<()> {
        let id = draft.id.clone();
        let found = match self.records.iter().position(|r| r.id() == &id) {
            Some(index) => {
                self.records[index] = draft.into_editable();
                true
            }
            None => false,
        };

        self.save()?;

        debug!(%id, found, "Updated record");
        self.listeners.emit(&StoreEvent::Updated { id, found });
        Ok(())
    }

    /// Stages a blank record with a fresh id and the default type.
    pub fn add_empty(&mut self) -> Result<RecordId> {
        let records = &self.records;
        let id = self
            .minter
            .mint(|candidate| records.iter().any(|r| r.id() == candidate))?;

        let record = Record::new(id.clone(), RecordType::default(), "", "");
        self.add(EditableRecord::new(record, Some(String::new())))?;
        Ok(id)
    }
}
