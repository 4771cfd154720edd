//! # System Lifecycle
//!
//! Starts one store actor per resource, hands out their clients, and shuts them down.
//!
//! ## The ClinicSystem Pattern
//!
//! ```rust,ignore
//! let system = ClinicSystem::new(&ClientConfig::from_env()?)?;
//!
//! let doctors = ListView::on_init(&system.doctor_client).await?;
//! system.clinic_client.register_clinic("North Wing").await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every mailbox
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests are done
//! 3. **Await completion** - every actor task is joined; a panicked task is reported
//!
//! Clones of a client keep their actor alive, so drop them before calling
//! [`ClinicSystem::shutdown`].

pub mod clinic_system;
pub mod tracing;

pub use clinic_system::*;
pub use self::tracing::*;
