use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use portscout_common::ScanError;
use portscout_common::network::target::Target;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

/// Upper bound on a single name lookup.
pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves `target` to the one address every probe of a scan will use.
///
/// Literal addresses are returned as-is. Hostnames go through the system
/// resolver; IPv4 answers are preferred over IPv6 when both are returned.
pub async fn resolve_target(target: &Target) -> Result<IpAddr, ScanError> {
    if let Some(addr) = target.addr() {
        return Ok(addr);
    }

    let host: String = target.host();
    let addrs: Vec<SocketAddr> = match timeout(RESOLVE_TIMEOUT, lookup_host((host.as_str(), 0))).await
    {
        Ok(Ok(addrs)) => addrs.collect(),
        Ok(Err(e)) => return Err(unresolvable(target, e.to_string())),
        Err(_elapsed) => {
            return Err(unresolvable(
                target,
                format!("lookup timed out after {}s", RESOLVE_TIMEOUT.as_secs()),
            ));
        }
    };

    debug!("{host} resolved to {} address(es)", addrs.len());

    pick_address(&addrs).ok_or_else(|| unresolvable(target, "no addresses returned".to_string()))
}

fn pick_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
}

fn unresolvable(target: &Target, reason: String) -> ScanError {
    ScanError::UnresolvableTarget {
        target: target.to_string(),
        reason,
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
