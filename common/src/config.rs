use std::time::Duration;

use crate::error::ScanError;
use crate::network::range::PortRange;
use crate::network::target::Target;

/// Probes allowed in flight at once unless told otherwise.
pub const DEFAULT_CONCURRENCY: usize = 512;

/// How long a single connection attempt may take before the port counts as closed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Presentation settings for the terminal front-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the ASCII banner.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops decoration, 2 and above prints only results.
    pub quiet: u8,
}

/// Parameters of one scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub target: Target,
    pub range: PortRange,
    pub concurrency: usize,
    pub timeout: Duration,
}

impl ScanConfig {
    pub fn new(target: Target, range: PortRange) -> Self {
        Self {
            target,
            range,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks every invariant the scanner depends on.
    pub fn validate(&self) -> Result<(), ScanError> {
        self.range.validate()?;

        if self.concurrency == 0 {
            return Err(ScanError::InvalidConfig(
                "concurrency must be greater than zero".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ScanError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
