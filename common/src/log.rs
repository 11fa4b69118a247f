//! Status logging macros.
//!
//! Thin wrappers over `tracing` so that every crate reports user-facing status
//! lines the same way. The terminal formatter in the CLI keys off
//! [`SUCCESS_TARGET`] and [`PRINT_TARGET`] to decide how a line is drawn.
//! Events on those targets and on [`FATAL_TARGET`] are program output, not
//! diagnostics, and are never silenced by the log filter.

/// Target used by [`success!`](crate::success) events.
pub const SUCCESS_TARGET: &str = "portscout::success";

/// Target used for raw output lines. Events on this target carry a single
/// `raw_msg` field that is written verbatim.
pub const PRINT_TARGET: &str = "portscout::print";

/// Target used by [`fatal!`](crate::fatal) events.
pub const FATAL_TARGET: &str = "portscout::fatal";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

/// Reports an error that ends the program.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::log::FATAL_TARGET, $($arg)*)
    };
}
