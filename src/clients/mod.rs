//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod clinic_client;
pub mod doctor_client;
pub mod patient_client;

pub use clinic_client::*;
pub use doctor_client::*;
pub use patient_client::*;
