use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub const NAME_FIELD: &str = "name";
pub const SUBREGION_FIELD: &str = "subregion";

/// One country object. Fields other than `name` and `subregion` are opaque
/// and keep their original order on write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// `None` when the field is missing or not a JSON string.
    pub fn name(&self) -> Option<&str> {
        self.data.get(NAME_FIELD).and_then(Value::as_str)
    }

    pub fn subregion(&self) -> Option<&str> {
        self.data.get(SUBREGION_FIELD).and_then(Value::as_str)
    }

    pub fn set_subregion(&mut self, subregion: &str) {
        self.data.insert(
            SUBREGION_FIELD.to_string(),
            Value::String(subregion.to_string()),
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubregionUpdate {
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub updates: Vec<SubregionUpdate>,
}

impl TransformResult {
    pub fn updated_count(&self) -> usize {
        self.updates.len()
    }

    pub fn into_parts(self) -> (Vec<Record>, usize) {
        let count = self.updates.len();
        (self.records, count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    pub output_path: PathBuf,
    pub backup_path: PathBuf,
    pub bytes_written: usize,
}

/// Summary of a whole run, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub input_path: PathBuf,
    pub total_records: usize,
    pub updates: Vec<SubregionUpdate>,
    /// `None` on a dry run.
    pub persisted: Option<PersistOutcome>,
}

impl PatchReport {
    pub fn updated_count(&self) -> usize {
        self.updates.len()
    }

    pub fn is_dry_run(&self) -> bool {
        self.persisted.is_none()
    }
}
