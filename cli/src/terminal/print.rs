use std::fmt::Display;

use colored::*;
use console::measure_text_width;
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 72;

/// Gap between the two columns of the company block.
const COLUMN_GUTTER: usize = 3;

/// A labeled report line, ready for alignment.
pub type Detail = (String, ColoredString);

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// All report output funnels through the raw-print tracing target, so the
/// subscriber decides where lines end up.
pub fn print(msg: &str) {
    info!(target: "cnpjr::print", "{msg}");
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

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::ACCENT),
        "─".repeat(right).color(colors::SEPARATOR)
    );

    print(&line);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// `Key......: value` with the dots sized against the given key width.
pub fn aligned_line<V>(key: &str, value: V, key_width: usize)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
    let separator: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), separator, value));
}

/// Renders one detail as a standalone cell string.
fn cell((key, value): &Detail) -> String {
    format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR),
        value
    )
}

/// Lays two detail lists out side by side, row by row.
///
/// Rows beyond the shorter list render as a single column. Widths are
/// measured ANSI-aware so colored cells line up.
pub fn two_column(left: &[Detail], right: &[Detail]) {
    let left_width = left
        .iter()
        .map(|detail| measure_text_width(&cell(detail)))
        .max()
        .unwrap_or(0)
        .max(TOTAL_WIDTH / 2);

    let rows = left.len().max(right.len());
    for i in 0..rows {
        let left_cell = left.get(i).map(|d| cell(d)).unwrap_or_default();
        let right_cell = right.get(i).map(|d| cell(d)).unwrap_or_default();

        let padding = left_width + COLUMN_GUTTER - measure_text_width(&left_cell);
        print(&format!(
            "{}{}{}",
            left_cell,
            " ".repeat(padding),
            right_cell
        ));
    }
}

/// `[idx] name` head line for a tree block.
pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

/// Branch lines under a [`tree_head`], keys dot-aligned.
pub fn as_tree_one_level(details: Vec<Detail>) {
    let key_width = details
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last {
            "├─".color(colors::SEPARATOR)
        } else {
            "└─".color(colors::SEPARATOR)
        };
        let dots: String = ".".repeat(key_width + 1 - key.chars().count());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
