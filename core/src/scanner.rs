//! The **scan coordinator**.
//!
//! [`Scanner`] turns a [`ScanConfig`] into a [`ScanResult`]: it validates the
//! configuration, resolves the target once, and then fans out one probe per
//! port through a [`Prober`], never keeping more than `concurrency` probes in
//! flight.
//!
//! Outcomes arrive in whatever order the network answers. They are folded
//! into a single accumulator owned by the task driving the scan, so no lock is
//! needed, and sorted once the last probe has reported.

use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::{StreamExt, stream};
use portscout_common::ScanError;
use portscout_common::config::ScanConfig;
use portscout_common::info;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::network::{resolve, tcp::TcpProber};

mod outcome;
mod progress;

pub use outcome::{PortState, ProbeFailure, ProbeOutcome, ScanResult};
pub use progress::{NoProgress, ProgressObserver};

use outcome::Tally;

/// Defines the strategy for probing a single transport-layer port.
///
/// Implementations must classify every attempt as exactly one [`PortState`]
/// and must not hold on to any connection once `probe` returns.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> ProbeOutcome;
}

pub struct Scanner<P = TcpProber> {
    prober: P,
}

impl<P: Prober> Scanner<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Scans every port of `config.range` on `config.target`.
    ///
    /// Fails before sending anything when the configuration is invalid or the
    /// target cannot be resolved. Per-port errors never fail the scan; they end
    /// up in [`ScanResult::failures`]. Once `cancel` fires the in-flight probes
    /// are dropped and [`ScanError::Cancelled`] is returned instead of a
    /// partial result.
    pub async fn run<O>(
        &self,
        config: &ScanConfig,
        observer: &O,
        cancel: &CancellationToken,
    ) -> Result<ScanResult, ScanError>
    where
        O: ProgressObserver + ?Sized,
    {
        config.validate()?;

        let address: IpAddr = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ScanError::Cancelled),
            resolved = resolve::resolve_target(&config.target) => resolved?,
        };

        if config.target.addr().is_none() {
            info!("{} resolved to {address}", config.target);
        }

        let started: Instant = Instant::now();
        let total: usize = config.range.port_count();
        let timeout: Duration = config.timeout;
        let prober: &P = &self.prober;

        debug!(
            "probing {total} port(s) on {address} with concurrency {} and timeout {}ms",
            config.concurrency,
            timeout.as_millis()
        );

        let mut probes = stream::iter(config.range)
            .map(move |port| prober.probe(SocketAddr::new(address, port), timeout))
            .buffer_unordered(config.concurrency);

        let mut tally = Tally::default();

        loop {
            let outcome: ProbeOutcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("scan of {address} cancelled, dropping in-flight probes");
                    return Err(ScanError::Cancelled);
                }
                next = probes.next() => match next {
                    Some(outcome) => outcome,
                    None => break,
                },
            };

            if let PortState::Error(reason) = &outcome.state {
                debug!("probe of port {} failed: {reason}", outcome.port);
            }

            let completed: usize = tally.record(outcome);
            observer.on_progress(completed, total);
        }

        Ok(tally.finish(address, started.elapsed()))
    }
}

/// Runs a TCP connect scan with the default prober.
pub async fn perform_scan<O>(
    config: &ScanConfig,
    observer: &O,
    cancel: &CancellationToken,
) -> Result<ScanResult, ScanError>
where
    O: ProgressObserver + ?Sized,
{
    Scanner::new(TcpProber).run(config, observer, cancel).await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
