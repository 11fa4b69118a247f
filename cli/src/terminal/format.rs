use std::time::Duration;

use portscout_common::services::{self, UNKNOWN_SERVICE};

pub const PORT_HEADER: &str = "PORT";
pub const SERVICE_HEADER: &str = "SERVICE";

/// One line of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRow {
    pub port: String,
    pub service: &'static str,
}

impl PortRow {
    pub fn is_known(&self) -> bool {
        self.service != UNKNOWN_SERVICE
    }
}

/// Labels every open port with its catalog entry, keeping the input order.
pub fn port_rows(open_ports: &[u16]) -> Vec<PortRow> {
    open_ports
        .iter()
        .map(|port| PortRow {
            port: port.to_string(),
            service: services::lookup(u32::from(*port)),
        })
        .collect()
}

/// Width of the port column, header included.
pub fn port_column_width(rows: &[PortRow]) -> usize {
    rows.iter()
        .map(|row| row.port.len())
        .chain(std::iter::once(PORT_HEADER.len()))
        .max()
        .unwrap_or(PORT_HEADER.len())
}

pub fn seconds(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
