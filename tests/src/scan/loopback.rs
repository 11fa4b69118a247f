#![cfg(test)]
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use portscout_common::config::ScanConfig;
use portscout_common::network::range::PortRange;
use portscout_common::network::target::Target;
use portscout_core::network::resolve::resolve_target;
use portscout_core::scanner::{self, NoProgress};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::utils::{localhost, RecordingObserver};

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// This test verifies that a real TCP connect scan finds a listener on localhost.
#[tokio::test]
async fn finds_loopback_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let config = ScanConfig::new(localhost(), PortRange::single(port).unwrap())
        .with_timeout(PROBE_TIMEOUT);
    let observer = RecordingObserver::default();

    let result = scanner::perform_scan(&config, &observer, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.open_ports, vec![port]);
    assert_eq!(observer.last(), Some((1, 1)));
}

#[tokio::test]
async fn closed_loopback_port_is_not_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ScanConfig::new(localhost(), PortRange::single(port).unwrap())
        .with_timeout(PROBE_TIMEOUT);

    let result = scanner::perform_scan(&config, &NoProgress, &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_empty(), "found {:?}", result.open_ports);
    assert!(result.failures.is_empty());
    assert_eq!(result.probed, 1);
}

#[tokio::test]
async fn range_around_listener_contains_it() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let start: u16 = port.saturating_sub(3).max(1);
    let end: u16 = port.saturating_add(3);
    let config = ScanConfig::new(localhost(), PortRange::new(start.into(), end.into()).unwrap())
        .with_concurrency(2)
        .with_timeout(PROBE_TIMEOUT);

    let result = scanner::perform_scan(&config, &NoProgress, &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.open_ports.contains(&port));
    assert!(result.open_ports.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(result.probed, usize::from(end - start) + 1);
}

/// The listener sits on whatever `localhost` resolves to, IPv4 or IPv6.
#[tokio::test]
async fn hostname_targets_are_resolved_once() {
    let target = Target::from_str("localhost").unwrap();
    let addr: IpAddr = resolve_target(&target).await.unwrap();
    let listener = TcpListener::bind(SocketAddr::new(addr, 0)).await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let config = ScanConfig::new(target, PortRange::single(port).unwrap())
        .with_timeout(PROBE_TIMEOUT);

    let result = scanner::perform_scan(&config, &NoProgress, &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.address.is_loopback());
    assert_eq!(result.address, addr);
    assert_eq!(result.open_ports, vec![port]);
}
