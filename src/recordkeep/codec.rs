//! JSON encoding of the record collection.
//!
//! The persisted blob is a JSON array of [`Record`]s. Only the persisted shape
//! is ever encoded; raw marks live on [`crate::model::EditableRecord`] and have
//! no serialized form.

use crate::error::{RecordkeepError, Result};
use crate::model::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn encode(&self, records: &[Record]) -> Result<String> {
        let blob = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };
        blob.map_err(RecordkeepError::Serialization)
    }

    pub fn decode(&self, blob: &str) -> Result<Vec<Record>> {
        serde_json::from_str(blob).map_err(RecordkeepError::Serialization)
    }
}
