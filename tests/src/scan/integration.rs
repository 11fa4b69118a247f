#![cfg(test)]
use std::str::FromStr;
use std::time::Duration;

use portscout_common::config::ScanConfig;
use portscout_common::network::range::PortRange;
use portscout_common::network::target::Target;
use portscout_common::ScanError;
use portscout_core::scanner::{NoProgress, ScanResult, Scanner};
use tokio_util::sync::CancellationToken;

use crate::utils::{localhost, localhost_config, MockProber, RecordingObserver};

async fn run_mock(scanner: &Scanner<MockProber>, config: &ScanConfig) -> ScanResult {
    scanner
        .run(config, &NoProgress, &CancellationToken::new())
        .await
        .expect("scan against the mock should succeed")
}

/// Only the three listening ports come back, in ascending order.
#[tokio::test]
async fn reports_exactly_the_open_ports() {
    let scanner = Scanner::new(MockProber::with_open_ports([443, 22, 80]));
    let result = run_mock(&scanner, &localhost_config(1, 1000, 64)).await;

    assert_eq!(result.open_ports, vec![22, 80, 443]);
    assert_eq!(result.probed, 1000);
    assert_eq!(scanner.prober().calls(), 1000);
    assert_eq!(scanner.prober().in_flight(), 0);
    assert!(result.failures.is_empty());
}

/// Completion order changes with the concurrency level, the result does not.
#[tokio::test]
async fn result_is_independent_of_concurrency() {
    let open = [1, 7, 22, 80, 443, 999, 1000];

    let sequential = Scanner::new(MockProber::with_open_ports(open));
    let parallel = Scanner::new(MockProber::with_open_ports(open));

    let one = run_mock(&sequential, &localhost_config(1, 1000, 1)).await;
    let fifty = run_mock(&parallel, &localhost_config(1, 1000, 50)).await;

    assert_eq!(one.open_ports, fifty.open_ports);
    assert_eq!(one.open_ports, open.to_vec());
    assert!(fifty.open_ports.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn repeated_scans_are_identical() {
    let scanner = Scanner::new(MockProber::with_open_ports([5, 3, 9]).failing_on([4]));
    let config = localhost_config(1, 20, 6);

    let first = run_mock(&scanner, &config).await;
    let second = run_mock(&scanner, &config).await;

    assert_eq!(first.open_ports, second.open_ports);
    assert_eq!(first.failures, second.failures);
}

#[tokio::test]
async fn progress_is_monotonic_and_ends_at_total() {
    let scanner = Scanner::new(MockProber::with_open_ports([10]));
    let observer = RecordingObserver::default();

    scanner
        .run(&localhost_config(100, 299, 17), &observer, &CancellationToken::new())
        .await
        .unwrap();

    let events = observer.events();
    assert_eq!(events.len(), 200);
    assert!(events.iter().all(|(_, total)| *total == 200));
    assert!(events.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(observer.last(), Some((200, 200)));
}

#[tokio::test]
async fn invalid_ranges_never_reach_the_prober() {
    let scanner = Scanner::new(MockProber::with_open_ports([22]));

    for range in [PortRange { start: 100, end: 50 }, PortRange { start: 0, end: 80 }] {
        let config = ScanConfig::new(localhost(), range);
        let result = scanner
            .run(&config, &NoProgress, &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(ScanError::InvalidRange { .. })));
    }

    assert_eq!(
        PortRange::new(1, 65536),
        Err(ScanError::InvalidRange { start: 1, end: 65536 })
    );
    assert_eq!(scanner.prober().calls(), 0);
}

#[tokio::test]
async fn unresolvable_target_is_fatal_before_probing() {
    let scanner = Scanner::new(MockProber::with_open_ports([22]));
    let target = Target::from_str("portscout-nowhere.invalid").unwrap();
    let config = ScanConfig::new(target, PortRange { start: 1, end: 100 });

    let result = scanner
        .run(&config, &NoProgress, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(ScanError::UnresolvableTarget { .. })));
    assert_eq!(scanner.prober().calls(), 0);
}

/// Per-port errors are kept on the result and do not stop the scan.
#[tokio::test]
async fn port_errors_do_not_abort_the_scan() {
    let scanner = Scanner::new(MockProber::with_open_ports([4, 7]).failing_on([6, 5]));
    let result = run_mock(&scanner, &localhost_config(1, 10, 3)).await;

    assert_eq!(result.open_ports, vec![4, 7]);
    assert_eq!(
        result.failures.iter().map(|f| f.port).collect::<Vec<u16>>(),
        vec![5, 6]
    );
    assert_eq!(result.probed, 10);
    assert_eq!(scanner.prober().calls(), 10);
}

#[tokio::test]
async fn in_flight_probes_never_exceed_concurrency() {
    for concurrency in [1, 4, 10] {
        let scanner =
            Scanner::new(MockProber::default().with_delay(Duration::from_millis(1)));
        run_mock(&scanner, &localhost_config(1, 120, concurrency)).await;

        let peak = scanner.prober().max_in_flight();
        assert!(peak <= concurrency, "peak {peak} exceeded {concurrency}");
        assert!(peak >= 1);
        if concurrency > 1 {
            assert!(peak > 1, "probes never overlapped at concurrency {concurrency}");
        }
    }
}

#[tokio::test]
async fn cancelling_mid_scan_yields_no_result() {
    let scanner = Scanner::new(
        MockProber::with_open_ports([1, 2, 3]).with_delay(Duration::from_millis(20)),
    );
    let observer = RecordingObserver::default();
    let cancel = CancellationToken::new();
    let config = localhost_config(1, 1000, 10);

    let (result, ()) = tokio::join!(scanner.run(&config, &observer, &cancel), async {
        tokio::time::sleep(Duration::from_millis(60)).await;
        cancel.cancel();
    });

    assert_eq!(result.unwrap_err(), ScanError::Cancelled);
    let (completed, total) = observer.last().unwrap_or((0, 1000));
    assert!(completed < total);
    assert!(scanner.prober().calls() < 1000);
    assert!(scanner.prober().max_in_flight() > 0);
    assert_eq!(scanner.prober().in_flight(), 0, "dropped connects still held");
}

#[tokio::test]
async fn cancelled_token_stops_scan_before_any_probe() {
    let scanner = Scanner::new(MockProber::with_open_ports([22]));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = scanner
        .run(&localhost_config(1, 100, 8), &NoProgress, &cancel)
        .await;

    assert_eq!(result.unwrap_err(), ScanError::Cancelled);
    assert_eq!(scanner.prober().calls(), 0);
}
