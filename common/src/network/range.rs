use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ScanError;

pub const MIN_PORT: u32 = 1;
pub const MAX_PORT: u32 = u16::MAX as u32;

/// An inclusive range of TCP ports.
///
/// Use [`PortRange::new`] to build one from user input. The fields are public
/// so tests and callers can describe a range literally; [`PortRange::validate`]
/// is what the scanner relies on before sending anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    /// Builds a range from raw bounds, rejecting anything outside `1..=65535`
    /// and ranges where `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, ScanError> {
        if start < MIN_PORT || end > MAX_PORT || start > end {
            return Err(ScanError::InvalidRange { start, end });
        }

        Ok(Self {
            start: start as u16,
            end: end as u16,
        })
    }

    /// Every valid port, 1 to 65535.
    pub fn full() -> Self {
        Self {
            start: MIN_PORT as u16,
            end: u16::MAX,
        }
    }

    pub fn single(port: u16) -> Result<Self, ScanError> {
        Self::new(port.into(), port.into())
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        Self::new(self.start.into(), self.end.into()).map(|_| ())
    }

    /// Number of ports covered. Zero for a range that fails validation.
    pub fn port_count(&self) -> usize {
        if self.start > self.end {
            return 0;
        }
        usize::from(self.end - self.start) + 1
    }

    pub fn to_iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_iter()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
