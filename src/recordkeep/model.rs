//! # Domain Model: Records, Marks and the Raw Mark Surface
//!
//! This module defines the data structures held by the store: [`Record`],
//! [`Mark`], [`RecordId`], [`RecordType`], and the two transient editing shapes
//! [`EditableRecord`] and [`RecordDraft`].
//!
//! ## Persisted vs Editable
//!
//! A [`Record`] is exactly what lands in the persisted blob. Its marks are a
//! structured list:
//!
//! ```text
//! { "id": 1718000000000, "type": "LDAP", "login": "jdoe", "password": "...",
//!   "marks": [{ "text": "work" }, { "text": "vpn" }] }
//! ```
//!
//! While a record is being created or edited, users type marks as a single
//! line, the *raw mark*:
//!
//! ```text
//! work; vpn
//! ```
//!
//! [`EditableRecord`] pairs a [`Record`] with that optional raw string. It does
//! not implement `Serialize`, so the raw mark can never reach storage.
//!
//! ## Mark Derivation
//!
//! - [`derive_marks`]: split on `;`, trim each piece. `None` or `""` gives no marks.
//! - [`join_marks`]: inverse surface form, texts joined with `;` (no spaces).
//!
//! ## Edge Cases
//!
//! - `"a;;b"` yields three marks, the middle one empty. Only a fully empty
//!   raw string collapses to an empty list.
//! - Whitespace is trimmed per segment, so `" work; personal "` round-trips to
//!   `"work;personal"`.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Separator between marks in the raw surface form.
pub const MARK_SEPARATOR: char = ';';

/// Record identifier.
///
/// Persisted ids keep their JSON typing: numbers stay numbers (integer or
/// not), strings stay strings. Minted ids are always integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(Number),
    Text(String),
}

impl RecordId {
    /// The id as an `i64`, if it is an integral number in range.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RecordId::Number(n) => n.as_i64(),
            RecordId::Text(_) => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(Number::from(n))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// Parses command-line input into an id.
///
/// A JSON number (`12`, `1.5`) is a numeric id. A double-quoted string
/// (`"12"`) is a text id with the quotes removed, which is how a text id
/// made only of digits is addressed. Anything else is taken as text verbatim.
impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Number(n)) => RecordId::Number(n),
            Ok(Value::String(text)) => RecordId::Text(text),
            _ => RecordId::Text(trimmed.to_string()),
        })
    }
}

/// The closed set of record kinds. The store only compares and stores these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    #[default]
    Ldap,
    Local,
    Ssh,
    Web,
}

impl RecordType {
    pub const ALL: [RecordType; 4] = [
        RecordType::Ldap,
        RecordType::Local,
        RecordType::Ssh,
        RecordType::Web,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Ldap => "LDAP",
            RecordType::Local => "LOCAL",
            RecordType::Ssh => "SSH",
            RecordType::Web => "WEB",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = RecordType::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown record type '{}' (expected one of {})", s, valid.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub text: String,
}

impl Mark {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The persisted unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub login: String,
    pub password: String,
    pub marks: Vec<Mark>,
}

impl Record {
    pub fn new(
        id: impl Into<RecordId>,
        record_type: RecordType,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            record_type,
            login: login.into(),
            password: password.into(),
            marks: Vec::new(),
        }
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }
}

/// A record as held in memory, with the raw mark text while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableRecord {
    pub record: Record,
    pub raw_mark: Option<String>,
}

impl EditableRecord {
    pub fn new(record: Record, raw_mark: Option<String>) -> Self {
        Self { record, raw_mark }
    }

    /// Wraps a freshly decoded record, deriving its raw mark from its marks.
    pub fn from_persisted(record: Record) -> Self {
        let raw_mark = join_marks(&record.marks);
        Self {
            record,
            raw_mark: Some(raw_mark),
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.record.id
    }

    /// Re-derives marks from the raw mark and clears it.
    ///
    /// A record with no raw mark has nothing pending and keeps its marks.
    pub fn flush_marks(&mut self) {
        if let Some(raw) = self.raw_mark.take() {
            self.record.marks = derive_marks(Some(raw.as_str()));
        }
    }
}

/// Replacement fields for an existing record. Carries no marks; they are
/// derived from `raw_mark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub id: RecordId,
    pub record_type: RecordType,
    pub login: String,
    pub password: String,
    pub raw_mark: Option<String>,
}

impl RecordDraft {
    /// Starts a draft from the current state of a record.
    ///
    /// When the record has no pending raw mark, the draft's raw mark is the
    /// joined form of its marks, so an untouched draft reproduces them.
    pub fn from_editable(editable: &EditableRecord) -> Self {
        let record = &editable.record;
        Self {
            id: record.id.clone(),
            record_type: record.record_type,
            login: record.login.clone(),
            password: record.password.clone(),
            raw_mark: Some(
                editable
                    .raw_mark
                    .clone()
                    .unwrap_or_else(|| join_marks(&record.marks)),
            ),
        }
    }

    pub fn into_editable(self) -> EditableRecord {
        let marks = derive_marks(self.raw_mark.as_deref());
        EditableRecord {
            record: Record {
                id: self.id,
                record_type: self.record_type,
                login: self.login,
                password: self.password,
                marks,
            },
            raw_mark: self.raw_mark,
        }
    }
}

/// Splits a raw mark string into trimmed marks.
pub fn derive_marks(raw: Option<&str>) -> Vec<Mark> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw
            .split(MARK_SEPARATOR)
            .map(|piece| Mark::new(piece.trim()))
            .collect(),
    }
}

/// Joins mark texts back into the raw surface form.
pub fn join_marks(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
