//! Record types cached by the store actors.
//!
//! The backend owns the schema. Every type here is a transparent wrapper around a JSON
//! object ([`Record`]) that only adds read accessors for the fields the views use.

pub mod clinic;
pub mod doctor;
pub mod patient;
pub mod record;

pub use clinic::*;
pub use doctor::*;
pub use patient::*;
pub use record::*;
