//! # RemoteResource Trait
//!
//! The `RemoteResource` trait is the contract every backend entity (Doctor, Patient, Clinic, …)
//! implements so that a generic [`StoreActor`](crate::framework::StoreActor) can cache it.
//!
//! # Architecture Note
//! The store actor never looks inside a record. It only needs to know how to move a record
//! across the wire (`Serialize`/`DeserializeOwned`), how to name the resource in logs, and how
//! to turn a record into a navigable list entry. Everything else about the record's shape is
//! left to the backend.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Bytes escaped in a single path segment; the same set `Url::path_segments_mut` uses.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Trait that any backend entity must implement to be cached by a `StoreActor`.
///
/// `Default` is the empty record. A fresh store starts with `current` set to it, so a
/// `register` before any `set_current` posts `{}`.
pub trait RemoteResource:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Short resource name used as the `resource` field in logs (e.g. `"doctor"`).
    const NAME: &'static str;

    /// Route prefix for list entries (e.g. `"/patient"`).
    const ROUTE: &'static str;

    /// Identifier used for routing and detail loads, if the record carries one.
    fn identifier(&self) -> Option<String>;

    /// Human readable text shown for this record in a list view.
    fn label(&self) -> String;

    /// Link target for this record: `ROUTE/identifier`, with the identifier escaped as one
    /// path segment.
    fn route(&self) -> String {
        let id = self.identifier().unwrap_or_default();
        format!("{}/{}", Self::ROUTE, utf8_percent_encode(&id, PATH_SEGMENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Patient, Record};

    #[test]
    fn test_route_escapes_identifier_as_one_segment() {
        let patient = Patient::from(Record::new().with("public_key", "a/b?c d"));
        assert_eq!(patient.route(), "/patient/a%2Fb%3Fc%20d");
    }

    #[test]
    fn test_route_matches_detail_url_segment() {
        let endpoints = crate::framework::ResourceEndpoints::nested(
            url::Url::parse("http://backend/patient").unwrap(),
        );
        let patient = Patient::from(Record::new().with("public_key", "02/aa#1"));
        let detail = endpoints.detail_url("02/aa#1").unwrap();
        assert_eq!(patient.route(), detail.path());
    }
}
