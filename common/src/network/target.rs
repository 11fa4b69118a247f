//! # Scan Target Model
//!
//! The host a scan is pointed at. A target is either:
//! * An IP address literal (e.g., `192.168.1.5`, `::1`, `[fe80::1]`).
//! * A hostname that still has to be resolved (e.g., `scanme.example.org`).
//!
//! Resolution is not done here; the scanner resolves a target exactly once
//! before the first probe.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Already an address, nothing to resolve.
    Addr { addr: IpAddr },
    /// A name that needs a lookup.
    Hostname { name: String },
}

impl Target {
    /// The address, when the target was given as a literal.
    pub fn addr(&self) -> Option<IpAddr> {
        match self {
            Target::Addr { addr } => Some(*addr),
            Target::Hostname { .. } => None,
        }
    }

    /// The host part as it should be handed to a resolver.
    pub fn host(&self) -> String {
        match self {
            Target::Addr { addr } => addr.to_string(),
            Target::Hostname { name } => name.clone(),
        }
    }
}

impl From<IpAddr> for Target {
    fn from(addr: IpAddr) -> Self {
        Target::Addr { addr }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Addr { addr } => write!(f, "{addr}"),
            Target::Hostname { name } => write!(f, "{name}"),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    /// Parses a string into a `Target`.
    ///
    /// Supported formats:
    /// * **Address**: IPv4 or IPv6 literal, IPv6 optionally in brackets.
    /// * **Hostname**: dot separated labels of letters, digits, `-` and `_`,
    ///   with an optional trailing dot.
    ///
    /// Anything carrying a port (`host:80`) is rejected; ports come from the
    /// range flags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err("target cannot be empty".to_string());
        }

        if let Some(target) = parse_addr(s) {
            return Ok(target);
        }

        parse_hostname(s)
    }
}

fn parse_addr(s: &str) -> Option<Target> {
    let unbracketed = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    unbracketed.parse::<IpAddr>().ok().map(Target::from)
}

fn parse_hostname(s: &str) -> Result<Target, String> {
    if s.contains('%') {
        return Err(format!(
            "invalid target '{s}': zone-scoped IPv6 addresses are not supported"
        ));
    }
    if s.contains(':') {
        return Err(format!(
            "invalid target '{s}': not a valid IPv6 address, and hostnames cannot \
             contain ':' (ports are given with --port-start/--port-end)"
        ));
    }

    let name = s.strip_suffix('.').unwrap_or(s);

    if name.len() > MAX_HOSTNAME_LEN {
        return Err(format!("invalid target '{s}': hostname is too long"));
    }

    for label in name.split('.') {
        validate_label(label).map_err(|reason| format!("invalid target '{s}': {reason}"))?;
    }

    Ok(Target::Hostname {
        name: name.to_ascii_lowercase(),
    })
}

fn validate_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty hostname label");
    }
    if label.len() > MAX_LABEL_LEN {
        return Err("hostname label is longer than 63 characters");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("hostname label cannot start or end with '-'");
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("hostname contains invalid characters");
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
