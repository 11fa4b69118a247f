use thiserror::Error;

/// Everything that can stop a scan from producing a result.
///
/// Per-port failures are not part of this enum: they are recorded on the
/// result and never abort the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("invalid port range {start}-{end}: ports must satisfy 1 <= start <= end <= 65535")]
    InvalidRange { start: u32, end: u32 },
    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),
    #[error("unable to resolve target '{target}': {reason}")]
    UnresolvableTarget { target: String, reason: String },
    #[error("scan cancelled")]
    Cancelled,
}
