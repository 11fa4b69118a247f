use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portscout_common::config::ScanConfig;
use portscout_common::network::range::PortRange;
use portscout_common::network::target::Target;
use portscout_core::scanner::{PortState, ProbeOutcome, Prober, ProgressObserver};

/// Scripted prober that never touches the network.
///
/// Ports listed as open answer `Open`, failing ports answer `Error`, the rest
/// `Closed`. Each probe yields a port-dependent number of times before
/// answering so completion order differs from submission order. Every call
/// is counted, as is the peak number of probes running at once.
#[derive(Default)]
pub struct MockProber {
    open: HashSet<u16>,
    failing: HashSet<u16>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockProber {
    pub fn with_open_ports(ports: impl IntoIterator<Item = u16>) -> Self {
        Self {
            open: ports.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.failing = ports.into_iter().collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Connections currently held open by unfinished calls.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn state_of(&self, port: u16) -> PortState {
        if self.failing.contains(&port) {
            PortState::Error("network is unreachable".to_string())
        } else if self.open.contains(&port) {
            PortState::Open
        } else {
            PortState::Closed
        }
    }
}

/// Decrements the in-flight counter even when the probe future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Prober for MockProber {
    async fn probe(&self, addr: SocketAddr, _timeout: Duration) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running: usize = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        for _ in 0..(addr.port() % 7) {
            tokio::task::yield_now().await;
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        ProbeOutcome::new(addr.port(), self.state_of(addr.port()))
    }
}

/// Observer that keeps every notification it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<(usize, usize)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(usize, usize)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<(usize, usize)> {
        self.events().last().copied()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, completed: usize, total: usize) {
        if let Ok(mut events) = self.events.lock() {
            events.push((completed, total));
        }
    }
}

pub fn localhost() -> Target {
    Target::from(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn localhost_config(start: u16, end: u16, concurrency: usize) -> ScanConfig {
    ScanConfig::new(localhost(), PortRange { start, end }).with_concurrency(concurrency)
}
