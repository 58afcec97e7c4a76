use crate::error::{CurioError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single catalog entry. The `id` is assigned once at creation time and
/// never changes, even when the entry is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub artist: String,
    pub style: String,
}

impl Record {
    pub fn new(id: u64, title: &str, year: i32, artist: &str, style: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
            artist: artist.to_string(),
            style: style.to_string(),
        }
    }

    /// The composite key this record lives under in the document.
    pub fn key(&self) -> String {
        record_key(&self.title, self.year, &self.artist)
    }

    /// Text rendering of the named field, used for search comparison.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::Title => self.title.clone(),
            Field::Year => self.year.to_string(),
            Field::Artist => self.artist.clone(),
            Field::Style => self.style.clone(),
        }
    }
}

/// Composite key for a record: title, year, artist concatenated in that
/// order. Derived from the fields on every call, never stored.
pub fn record_key(title: &str, year: i32, artist: &str) -> String {
    format!("{}{}{}", title, year, artist)
}

/// A searchable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Year,
    Artist,
    Style,
}

impl FromStr for Field {
    type Err = CurioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "title" => Ok(Field::Title),
            "year" => Ok(Field::Year),
            "artist" => Ok(Field::Artist),
            "style" => Ok(Field::Style),
            other => Err(CurioError::Validation(format!(
                "Unknown field '{}' (expected id, title, year, artist or style)",
                other
            ))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Year => "year",
            Field::Artist => "artist",
            Field::Style => "style",
        };
        write!(f, "{}", name)
    }
}

/// The whole persisted state: every record keyed by its composite key, plus
/// the id counter. The map preserves insertion order, which is also the CSV
/// export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub records: IndexMap<String, Record>,
    pub next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl Document {
    /// Locate a record by its stored id. Linear scan; the document is keyed
    /// by composite key, not id.
    pub fn find_by_id(&self, id: u64) -> Option<(&String, &Record)> {
        self.records.iter().find(|(_, record)| record.id == id)
    }
}
