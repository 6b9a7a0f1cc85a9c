use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{EditableRecord, Record, RecordType};

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

        /// Adds records with ids `1..=count` and persists them.
        pub fn with_records(mut self, count: i64) -> Self {
            for i in 1..=count {
                let record = Record::new(i, RecordType::Ldap, format!("user{}", i), "secret");
                self.store
                    .add(EditableRecord::new(record, Some(format!("tag{}", i))))
                    .unwrap();
            }
            self.store.save().unwrap();
            self
        }

        pub fn with_record(mut self, id: i64, login: &str, raw_mark: &str) -> Self {
            let record = Record::new(id, RecordType::Local, login, "pw");
            self.store
                .add(EditableRecord::new(record, Some(raw_mark.to_string())))
                .unwrap();
            self.store.save().unwrap();
            self
        }
    }
}
