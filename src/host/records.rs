use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use validator::Validate;
use crate::error::{LoadError, ViewError};
use crate::models::{ListView, RecommendationRecord};

/// The server-rendered recommendation list, as typed records
///
/// Ids are unique; upstream order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCollection {
    records: Vec<RecommendationRecord>,
}

impl RecordCollection {
    /// Build a collection, keeping the first record of any duplicated id
    pub fn new(records: Vec<RecommendationRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id.clone());
                if !fresh {
                    tracing::warn!("Skipping duplicate recommendation id: {}", record.id);
                }
                fresh
            })
            .collect();

        Self { records }
    }

    /// Parse a JSON array of records
    ///
    /// Entries that do not deserialize or fail validation are skipped with a
    /// warning. A document that is not an array yields an empty collection.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: Value = serde_json::from_str(json)?;

        let items = match raw {
            Value::Array(items) => items,
            other => {
                tracing::warn!("Recommendation data is not an array (got {}); using empty list", kind(&other));
                Vec::new()
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record: RecommendationRecord = match serde_json::from_value(item) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping recommendation #{}: {}", index, e);
                    continue;
                }
            };
            if let Err(e) = record.validate() {
                tracing::warn!("Skipping invalid recommendation {:?}: {}", record.id, e);
                continue;
            }
            records.push(record);
        }

        Ok(Self::new(records))
    }

    /// Load records from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let collection = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} recommendations from {}", collection.len(), path.display());
        Ok(collection)
    }

    pub fn as_slice(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Look up a record for the detail viewer
    pub fn find_by_id(&self, id: &str) -> Option<&RecommendationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records rearranged into a view's display order
    ///
    /// Ids the collection does not hold are ignored; records the view does
    /// not mention keep their relative order at the end.
    pub fn reordered(&self, view: &ListView) -> Self {
        let mut placed = HashSet::new();
        let mut records = Vec::with_capacity(self.records.len());

        for id in &view.ordered_ids {
            match self.find_by_id(id) {
                Some(record) if placed.insert(record.id.as_str()) => records.push(record.clone()),
                Some(_) => {}
                None => ViewError::UnknownRecordReference(id.clone()).absorb(),
            }
        }
        for record in &self.records {
            if !placed.contains(record.id.as_str()) {
                records.push(record.clone());
            }
        }

        Self { records }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
