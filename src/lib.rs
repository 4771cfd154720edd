#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Clinic Client
//!
//! > **Task-owned resource stores for a clinical records REST backend.**
//!
//! This crate is the data-access layer of a small records front end. For each backend
//! resource (doctors, patients, clinics) it keeps a **resource store**: the last loaded list,
//! a single "current" record and the last error message. Stores are filled by plain JSON
//! calls: `load_list` (GET the collection), `load(id)` (GET one record) and `register`
//! (POST the current record).
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One task per store
//!
//! A store is never a global. Each one is owned by a [`StoreActor`](framework::StoreActor)
//! running in its own Tokio task, and the rest of the program reaches it through a cloneable
//! client. Requests to one store are handled one at a time, so the store needs no locks and
//! concurrent list loads resolve in arrival order.
//!
//! ### Generics: one client for every entity
//!
//! `StoreActor<R: RemoteResource>` is written once. A record type only says how it is named in
//! logs and how it is linked from a list view; see [`framework::RemoteResource`].
//!
//! ### Opaque records
//!
//! The backend owns the schema. [`model::Record`] is a JSON object that survives a
//! load/register round trip unchanged, and [`model::Doctor`], [`model::Patient`] and
//! [`model::Clinic`] are transparent wrappers with read accessors on top.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: store actor, client, messages, HTTP transport, errors.
//! - **Key items**: [`StoreActor`](framework::StoreActor), [`StoreClient`](framework::StoreClient),
//!   [`HttpTransport`](framework::HttpTransport).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: spawns the three stores from a [`ClientConfig`](config::ClientConfig) and shuts
//!   them down.
//! - **Key items**: [`ClinicSystem`](lifecycle::ClinicSystem).
//!
//! ### 3. The Interface ([`clients`], [`view`])
//! - **Role**: typed clients with per-resource errors, and the list view that renders a store.
//!
//! ### 4. The Resources ([`doctor_actor`], [`patient_actor`], [`clinic_actor`])
//! - **Role**: concrete [`RemoteResource`](framework::RemoteResource) implementations and
//!   actor factories.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point at a backend and print the rendered lists
//! CLINIC_API_URL=http://localhost:8000 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod clinic_actor;
pub mod config;
pub mod doctor_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod patient_actor;
pub mod view;
