use std::net::IpAddr;
use std::time::Duration;

/// What a single probe learned about a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortState {
    /// The target accepted the connection.
    Open,
    /// Refused, or no answer before the timeout.
    Closed,
    /// The attempt failed for a reason unrelated to the port itself.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub port: u16,
    pub state: PortState,
}

impl ProbeOutcome {
    pub fn new(port: u16, state: PortState) -> Self {
        Self { port, state }
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

/// A port whose probe ended in [`PortState::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub port: u16,
    pub reason: String,
}

/// The outcome of one completed scan.
///
/// `open_ports` and `failures` are both sorted ascending by port with no
/// duplicates, whatever order the probes finished in.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The address every probe was sent to.
    pub address: IpAddr,
    pub open_ports: Vec<u16>,
    pub failures: Vec<ProbeFailure>,
    /// Number of ports that received an outcome; equals the range length.
    pub probed: usize,
    pub elapsed: Duration,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.open_ports.is_empty()
    }
}

/// Accumulates outcomes while a scan is running.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    completed: usize,
    open: Vec<u16>,
    failures: Vec<ProbeFailure>,
}

impl Tally {
    pub(crate) fn record(&mut self, outcome: ProbeOutcome) -> usize {
        self.completed += 1;

        match outcome.state {
            PortState::Open => self.open.push(outcome.port),
            PortState::Closed => {}
            PortState::Error(reason) => self.failures.push(ProbeFailure {
                port: outcome.port,
                reason,
            }),
        }

        self.completed
    }

    pub(crate) fn finish(mut self, address: IpAddr, elapsed: Duration) -> ScanResult {
        self.open.sort_unstable();
        self.open.dedup();
        self.failures.sort_unstable_by_key(|failure| failure.port);
        self.failures.dedup_by_key(|failure| failure.port);

        ScanResult {
            address,
            open_ports: self.open,
            failures: self.failures,
            probed: self.completed,
            elapsed,
        }
    }
}
