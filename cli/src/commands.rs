pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser};
use portscout_common::ScanError;
use portscout_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, ScanConfig};
use portscout_common::network::range::{MAX_PORT, MIN_PORT, PortRange};
use portscout_common::network::target::Target;

#[derive(Parser, Debug)]
#[command(name = "portscout")]
#[command(version, about = "A concurrent TCP port scanner.")]
pub struct CommandLine {
    /// Host to scan, as an IP address or a resolvable hostname
    #[arg(value_name = "TARGET")]
    pub target: Target,

    /// First port of the range
    #[arg(long = "port-start", value_name = "PORT", default_value_t = MIN_PORT)]
    pub port_start: u32,

    /// Last port of the range
    #[arg(long = "port-end", value_name = "PORT", default_value_t = MAX_PORT)]
    pub port_end: u32,

    /// Maximum number of connection attempts in flight
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-port connection timeout in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,

    /// Less output; repeat to print the result table only
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }

    /// Turns the raw flags into a checked scan configuration.
    pub fn scan_config(&self) -> Result<ScanConfig, ScanError> {
        let range: PortRange = PortRange::new(self.port_start, self.port_end)?;
        let cfg = ScanConfig::new(self.target.clone(), range)
            .with_concurrency(self.concurrency)
            .with_timeout(Duration::from_millis(self.timeout));

        cfg.validate()?;
        Ok(cfg)
    }
}
