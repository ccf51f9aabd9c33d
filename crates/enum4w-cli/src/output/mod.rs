//! Terminal rendering: banner, section headers, colors, columns.

use colored::{Color, Colorize};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Inner width of the banner box.
const BANNER_WIDTH: usize = 45;

/// Continuation marker appended to cut lines.
pub const CONTINUATION: &str = " ...";

/// Entries above this count are laid out in columns.
pub const COLUMN_THRESHOLD: usize = 9;

/// Environment variable that turns colors off when set to anything.
pub const COLORS_DISABLED_ENV: &str = "ANSI_COLORS_DISABLED";

/// Apply the color preference for the whole run.
///
/// `colored` already honours `NO_COLOR` and `CLICOLOR*`; the flag and
/// `ANSI_COLORS_DISABLED` are layered on top.
pub fn configure_colors(no_color: bool) {
    if no_color || std::env::var_os(COLORS_DISABLED_ENV).is_some() {
        colored::control::set_override(false);
    }
}

/// Print the start-up banner.
pub fn print_banner() {
    let rule = format!("+{}+", "=".repeat(BANNER_WIDTH));
    println!("{rule}");
    println!("{}", banner_line("[ ENUM4W LOCAL ENUMERATION ]", Color::Green));
    println!("{}", banner_line("[ By Hackers For Hackers! ]", Color::Yellow));
    println!("{}", banner_line("[ LEGAL: NO WARRANTY; USE AT YOUR OWN RISK ]", Color::Red));
    println!("{}", banner_line("[ Star this repo on wesleyjones001/Enum4w ]", Color::Green));
    println!("{rule}");
}

/// Center `text` inside the banner box, padding on the plain text width.
fn banner_line(text: &str, color: Color) -> String {
    let width = text.chars().count();
    let left = BANNER_WIDTH.saturating_sub(width) / 2;
    let right = BANNER_WIDTH.saturating_sub(width + left);
    format!(
        "|{}{}{}|",
        " ".repeat(left),
        text.color(color),
        " ".repeat(right)
    )
}

/// Print a blank line and a yellow section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.yellow());
}

/// Keep the first `budget` characters of `line` and append the continuation marker.
#[must_use]
pub fn truncate_line(line: &str, budget: usize) -> String {
    let cut: String = line.chars().take(budget).collect();
    format!("{cut}{CONTINUATION}")
}

/// Lay `cells` out `width` to a row without borders.
#[must_use]
pub fn columns(cells: &[String], width: usize) -> String {
    let width = width.max(1);
    let mut builder = Builder::default();
    for chunk in cells.chunks(width) {
        let mut row = chunk.to_vec();
        row.resize(width, String::new());
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::empty());
    table.to_string()
}

/// Render entries one per line, or in three columns past the threshold.
#[must_use]
pub fn listing(cells: &[String]) -> String {
    if cells.len() > COLUMN_THRESHOLD {
        columns(cells, 3)
    } else {
        cells.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_line() {
        let line = "x".repeat(200);
        let cut = truncate_line(&line, 120);
        assert_eq!(cut.len(), 120 + CONTINUATION.len());
        assert!(cut.ends_with(" ..."));
    }

    #[test]
    fn test_truncate_short_line_keeps_all() {
        assert_eq!(truncate_line("root 1 init", 120), "root 1 init ...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let line = "é".repeat(130);
        let cut = truncate_line(&line, 120);
        assert_eq!(cut.chars().count(), 120 + CONTINUATION.len());
    }

    #[test]
    fn test_short_listing_one_per_line() {
        let cells: Vec<String> = ["root", "alice"].map(String::from).to_vec();
        assert_eq!(listing(&cells), "root\nalice");
    }

    #[test]
    fn test_long_listing_in_columns_keeps_everyone() {
        let cells: Vec<String> = (0..10).map(|i| format!("user{i}")).collect();
        let out = listing(&cells);
        assert_eq!(out.lines().count(), 4);
        for cell in &cells {
            assert!(out.contains(cell.as_str()));
        }
        assert!(out.lines().next().unwrap().contains("user2"));
    }

    #[test]
    fn test_banner_lines_align() {
        colored::control::set_override(false);
        let line = banner_line("[ ENUM4W LOCAL ENUMERATION ]", Color::Green);
        assert_eq!(line.chars().count(), BANNER_WIDTH + 2);
        assert!(line.starts_with('|') && line.ends_with('|'));
    }
}
