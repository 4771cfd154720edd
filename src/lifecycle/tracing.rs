//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! The crate logs with structured fields rather than formatted strings. Every store actor
//! tags its events with `resource` (`doctor`, `patient`, `clinic`):
//!
//! - **Actor lifecycle** at `info`: `Actor started`, `Shutdown size=N`
//! - **Completed operations** at `info`: `List loaded size=N`, `Loaded id=..`, `Registered`
//! - **Request details** at `debug`: URLs, record payloads, snapshot sizes
//! - **Failures** at `warn`: `LoadList failed error=..`, `Register failed error=..`
//!
//! ```bash
//! RUST_LOG=info cargo run                          # lifecycle + outcomes
//! RUST_LOG=debug cargo run                         # full payloads
//! RUST_LOG=clinic_client::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a failing backend shows up as:
//!
//! ```text
//! INFO Actor started resource="doctor" collection=http://localhost:8000/api/doctors
//! WARN doctor_list:load_list: LoadList failed resource="doctor" error=Request to http://localhost:8000/api/doctors failed with status 500
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // `resource` field already says where an event came from
        .compact()
        .init();
}
