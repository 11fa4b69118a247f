//! Static catalog of well-known TCP services.
//!
//! Labels are a best-effort hint based on the port number alone; nothing here
//! talks to the service.

/// Returned by [`lookup`] for ports without an entry.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Sorted by port so lookups can binary search.
const WELL_KNOWN_PORTS: &[(u16, &str)] = &[
    (20, "FTP (Data)"),
    (21, "FTP (Control)"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (88, "Kerberos"),
    (110, "POP3"),
    (111, "RPCBind"),
    (135, "MSRPC"),
    (139, "NetBIOS"),
    (143, "IMAP"),
    (389, "LDAP"),
    (443, "HTTPS"),
    (445, "SMB"),
    (465, "SMTPS"),
    (587, "SMTP (TLS)"),
    (631, "IPP"),
    (636, "LDAPS"),
    (993, "IMAP (TLS)"),
    (995, "POP3 (TLS)"),
    (1433, "MSSQL"),
    (1521, "Oracle"),
    (2049, "NFS"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
    (5900, "VNC"),
    (6379, "Redis"),
    (8080, "HTTP (Alt)"),
    (8443, "HTTPS (Alt)"),
    (9200, "Elasticsearch"),
    (27017, "MongoDB"),
];

/// The service name registered for `port`, if any.
pub fn service_name(port: u32) -> Option<&'static str> {
    let port = u16::try_from(port).ok()?;
    WELL_KNOWN_PORTS
        .binary_search_by_key(&port, |(p, _)| *p)
        .ok()
        .map(|idx| WELL_KNOWN_PORTS[idx].1)
}

/// The service name for `port`, or [`UNKNOWN_SERVICE`].
pub fn lookup(port: u32) -> &'static str {
    service_name(port).unwrap_or(UNKNOWN_SERVICE)
}
