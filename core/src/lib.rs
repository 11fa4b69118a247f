//! Scanning engine for `portscout`.
//!
//! * [`network`] knows how to talk to the wire: resolving a target and probing a
//!   single TCP port.
//! * [`scanner`] drives probes across a port range with bounded concurrency and
//!   turns their outcomes into a deterministic [`scanner::ScanResult`].
//!
//! Nothing in this crate prints; progress is reported through
//! [`scanner::ProgressObserver`] and results are returned as data.

pub mod network;
pub mod scanner;
