//! End-to-end checks of the scan coordinator.
//!
//! `utils` holds the instrumented fakes shared by the test modules.

pub mod utils;

#[cfg(test)]
mod scan;
