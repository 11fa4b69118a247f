use crate::terminal::format::{self, PORT_HEADER, PortRow, SERVICE_HEADER};
use crate::terminal::{banner, colors};
use colored::*;
use portscout_common::log::PRINT_TARGET;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 11;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Writes a raw line through the logging pipeline so it never tears the progress bar.
pub fn print(msg: &str) {
    tracing::info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PORTSCOUT v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V: AsRef<str>>(key: &str, value: V) {
    let whitespace: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.as_ref().color(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Two-column table of open ports. With `q_level >= 2` only bare
/// `port<TAB>service` lines are written.
pub fn port_table(rows: &[PortRow], q_level: u8) {
    if q_level >= 2 {
        for row in rows {
            print(&format!("{}\t{}", row.port, row.service));
        }
        return;
    }

    let width: usize = format::port_column_width(rows);
    let head: String = format!(
        " {}   {}",
        format!("{:<width$}", PORT_HEADER, width = width)
            .bold()
            .color(colors::ACCENT),
        SERVICE_HEADER.bold().color(colors::ACCENT)
    );
    print(&head);
    print(&format!(" {}", "─".repeat(TOTAL_WIDTH - 2).color(colors::SEPARATOR)));

    for row in rows {
        let service: ColoredString = if row.is_known() {
            row.service.color(colors::SERVICE)
        } else {
            row.service.color(colors::SERVICE_UNKNOWN).italic()
        };
        let port: ColoredString = format!("{:<width$}", row.port, width = width).color(colors::PORT);
        print(&format!(" {}   {}", port, service));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

const NO_RESULTS_0: &str = r#"
              _   _  ___     ___  ____  _____ _   _
             | \ | |/ _ \   / _ \|  _ \| ____| \ | |
             |  \| | | | | | | | | |_) |  _| |  \| |
             | |\  | |_| | | |_| |  __/| |___| |\  |
             |_| \_|\___/   \___/|_|   |_____|_| \_|
              ____   ___  ____ _____ ____
             |  _ \ / _ \|  _ \_   _/ ___|
             | |_) | | | | |_) || | \___ \
             |  __/| |_| |  _ < | |  ___) |
             |_|    \___/|_| \_\|_| |____/
"#;

pub fn no_results(q_level: u8) {
    if q_level == 0 {
        print(&format!("{}", NO_RESULTS_0.red().bold()));
    }
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
