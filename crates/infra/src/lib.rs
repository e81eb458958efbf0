//! # Salonbook Infra
//!
//! Infrastructure adapters for the booking core.
//!
//! This crate contains:
//! - The HTTP client with retry support
//! - The remote reservation store adapter
//! - The system clock and tracing notifier adapters
//! - Configuration loading
//!
//! ## Architecture
//! - Implements the port traits defined in `salonbook-core`
//! - All transport and platform detail stays behind those traits

pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod notify;
pub mod store;

// Re-export commonly used items
pub use clock::SystemClock;
pub use config::StoreConfig;
pub use errors::InfraError;
pub use http::HttpClient;
pub use notify::TracingNotifier;
pub use store::RemoteReservationStore;
