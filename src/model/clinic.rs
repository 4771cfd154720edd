use crate::model::Record;
use serde::{Deserialize, Serialize};

/// A clinic registered on the backend. Listed as `{"public_key", "name"}`; registered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clinic(Record);

impl Clinic {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Record::new().with("name", name.into()))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str_field("name")
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

impl From<Record> for Clinic {
    fn from(record: Record) -> Self {
        Self(record)
    }
}
