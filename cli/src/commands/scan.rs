use std::io;

use colored::*;
use portscout_common::config::{Config, ScanConfig};
use portscout_common::{fatal, success, warn};
use portscout_core::scanner::{self, ScanResult};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug};

use crate::EXIT_INTERRUPTED;
use crate::commands::CommandLine;
use crate::mprint;
use crate::terminal::format::{self, PortRow};
use crate::terminal::progress::ScanProgress;
use crate::terminal::{colors, print};

pub async fn scan(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let scan_cfg: ScanConfig = commands.scan_config()?;

    print::header("starting scanner", cfg.quiet);
    print_parameters(&scan_cfg, cfg);

    let cancel: CancellationToken = CancellationToken::new();
    let interrupt: JoinHandle<()> = listen_for_interrupt(cancel.clone());

    let progress: ScanProgress = ScanProgress::new(scan_cfg.range.port_count(), cfg.quiet);
    let outcome = scanner::perform_scan(&scan_cfg, &progress, &cancel)
        .instrument(progress.span())
        .await;

    drop(progress);
    interrupt.abort();

    let result: ScanResult = outcome?;
    report(&scan_cfg, &result, cfg);
    Ok(())
}

/// Cancels the scan on Ctrl-C and exits at once on a second one, which
/// matters while a blocking DNS lookup keeps the runtime alive.
fn listen_for_interrupt(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if handle_interrupts(tokio::signal::ctrl_c, &cancel).await {
            fatal!("Interrupted again, exiting without waiting for the scan to wind down");
            crate::exit_now(EXIT_INTERRUPTED);
        }
    })
}

/// Returns `true` when a second interrupt arrives after the scan was cancelled.
async fn handle_interrupts<F, Fut>(mut next_interrupt: F, cancel: &CancellationToken) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    if next_interrupt().await.is_err() {
        return false;
    }
    debug!("interrupt received");
    cancel.cancel();

    next_interrupt().await.is_ok()
}

fn print_parameters(scan_cfg: &ScanConfig, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::aligned_line("Target", scan_cfg.target.to_string());
    print::aligned_line(
        "Ports",
        format!("{} ({} total)", scan_cfg.range, scan_cfg.range.port_count()),
    );
    print::aligned_line("Concurrency", scan_cfg.concurrency.to_string());
    print::aligned_line("Timeout", format!("{}ms", scan_cfg.timeout.as_millis()));
}

fn report(scan_cfg: &ScanConfig, result: &ScanResult, cfg: &Config) {
    if result.is_empty() {
        no_ports_found(scan_cfg, cfg);
    } else {
        print::header(&format!("open ports on {}", scan_cfg.target), cfg.quiet);
        let rows: Vec<PortRow> = format::port_rows(&result.open_ports);
        print::port_table(&rows, cfg.quiet);
    }

    report_failures(result, cfg);
    print_summary(scan_cfg, result, cfg);
}

fn no_ports_found(scan_cfg: &ScanConfig, cfg: &Config) {
    print::header("zero open ports", cfg.quiet);
    print::no_results(cfg.quiet);
    if cfg.quiet < 2 {
        warn!("No open ports found on {}", scan_cfg.target);
    }
}

fn report_failures(result: &ScanResult, cfg: &Config) {
    if result.failures.is_empty() || cfg.quiet >= 2 {
        return;
    }

    let count: usize = result.failures.len();
    warn!(
        "{count} {} could not be probed; run with RUST_LOG=debug for details",
        format::plural(count, "port", "ports")
    );

    for failure in &result.failures {
        debug!("port {}: {}", failure.port, failure.reason);
    }
}

fn print_summary(scan_cfg: &ScanConfig, result: &ScanResult, cfg: &Config) {
    let count: usize = result.open_ports.len();
    let open_ports: ColoredString = format!(
        "{count} open {}",
        format::plural(count, "port", "ports")
    )
    .bold()
    .green();
    let total_time: ColoredString = format::seconds(result.elapsed).bold().yellow();
    let output: String = format!(
        "Scan Complete: {open_ports} on {} in {total_time}",
        result.address
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        1 => {
            mprint!();
            success!("{}", output);
        }
        _ => {}
    }

    debug!(
        "{} of {} ports probed on {}",
        result.probed,
        scan_cfg.range.port_count(),
        scan_cfg.target
    );
}
