//! Shared models for `portscout`.
//!
//! Everything in here is plain data plus validation: the scan target, the port
//! range, the scan configuration, the error taxonomy and the static service
//! catalog. No I/O happens in this crate.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod services;

pub use error::ScanError;

#[doc(hidden)]
pub use tracing;
