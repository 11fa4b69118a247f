use indicatif::ProgressStyle;
use portscout_core::scanner::ProgressObserver;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str =
    "{spinner:.blue} {msg} [{bar:32.cyan/blue}] {pos}/{len} ports ({percent}%, eta {eta})";

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress bar fed by the scanner.
///
/// The bar lives on a tracing span; instrument the scan future with
/// [`ScanProgress::span`] so the bar shows while the scan is polled.
pub struct ScanProgress {
    span: Span,
}

impl ScanProgress {
    pub fn new(total: usize, q_level: u8) -> Self {
        let span: Span = if q_level > 0 {
            Span::none()
        } else {
            info_span!("scan", indicatif.pb_show = true)
        };

        span.pb_set_style(&style());
        span.pb_set_length(total as u64);
        span.pb_set_message("Probing");

        Self { span }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }
}

impl ProgressObserver for ScanProgress {
    fn on_progress(&self, completed: usize, _total: usize) {
        self.span.pb_set_position(completed as u64);
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("█▓░")
}
