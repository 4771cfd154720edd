use crate::model::Record;
use serde::{Deserialize, Serialize};

/// A doctor as returned by the backend, or a user record loaded from the users host.
///
/// # Store Framework
/// This struct implements the [`RemoteResource`](crate::framework::RemoteResource) trait,
/// allowing it to be cached by a [`StoreActor`](crate::framework::StoreActor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doctor(Record);

impl Doctor {
    pub fn key(&self) -> Option<String> {
        self.0.key()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str_field("name")
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

impl From<Record> for Doctor {
    fn from(record: Record) -> Self {
        Self(record)
    }
}
