mod commands;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use commands::{CommandLine, scan};
use portscout_common::{ScanError, fatal};
use terminal::{logging, print};

/// Conventional exit status for a run stopped by SIGINT.
pub(crate) const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging();
    print::banner(cfg.no_banner, cfg.quiet);

    match scan::scan(&commands, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ScanError>() {
            Some(ScanError::Cancelled) => {
                fatal!("Scan cancelled, no results were produced");
                // a resolver thread may still be blocked; don't let runtime shutdown join it
                exit_now(EXIT_INTERRUPTED)
            }
            _ => {
                fatal!("Scan could not be completed: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Leaves immediately, skipping the runtime's wait on blocking tasks.
pub(crate) fn exit_now(code: u8) -> ! {
    let _ = io::stdout().flush();
    std::process::exit(i32::from(code))
}
