use crate::model::Record;
use serde::{Deserialize, Serialize};

/// A patient record (`public_key`, `name`, `surname`, plus whatever else the backend sends).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patient(Record);

impl Patient {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self(
            Record::new()
                .with("name", name.into())
                .with("surname", surname.into()),
        )
    }

    pub fn public_key(&self) -> Option<&str> {
        self.0.str_field("public_key")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str_field("name")
    }

    pub fn surname(&self) -> Option<&str> {
        self.0.str_field("surname")
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

impl From<Record> for Patient {
    fn from(record: Record) -> Self {
        Self(record)
    }
}
