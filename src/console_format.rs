/// Console formatting module - Pure rendering concerns
///
/// This module handles console output of the report sheet:
/// - Column width fitting to the terminal
/// - Unicode-aware truncation and padding
/// - Box-drawn table layout, optionally coloured
///
/// `TableWriter` writes to any `std::io::Write`, so tests render into a
/// `Vec<u8>` with colours off.
use crate::report::ReportSheet;
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest a column is squeezed to before the table is allowed to overflow
const MIN_COLUMN_WIDTH: usize = 5;

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stdout() {
                let _ = t.fg(color);
                let _ = t.attr(term::Attr::Bold);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                return Ok(());
            }
        }
        write!(self.writer, "{}", text)
    }

    fn write_rule(&mut self, widths: &[usize], left: char, mid: char, right: char) -> io::Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w + 2)).collect();
        writeln!(self.writer, "{}{}{}", left, segments.join(mid.to_string().as_str()), right)
    }

    fn write_cells(&mut self, cells: &[String], widths: &[usize], color: Option<Color>) -> io::Result<()> {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| truncate_with_padding(cells.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect();
        let line = format!("│ {} │", padded.join(" │ "));

        match color {
            Some(c) => self.write_colored(&line, c)?,
            None => write!(self.writer, "{}", line)?,
        }
        writeln!(self.writer)
    }

    /// Write the whole sheet as a boxed table fitted to `max_width` columns.
    pub fn write_sheet(&mut self, sheet: &ReportSheet, max_width: usize) -> io::Result<()> {
        let widths = fit_column_widths(sheet, max_width);

        self.write_rule(&widths, '┌', '┬', '┐')?;
        self.write_cells(&sheet.header, &widths, Some(term::color::BRIGHT_CYAN))?;
        self.write_rule(&widths, '├', '┼', '┤')?;
        for row in &sheet.rows {
            self.write_cells(row, &widths, None)?;
        }
        self.write_rule(&widths, '└', '┴', '┘')?;
        self.writer.flush()
    }
}

/// Natural width of each column, shrunk widest-first until the table
/// (borders included) fits in `max_width`.
pub fn fit_column_widths(sheet: &ReportSheet, max_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = sheet.header.iter().map(|h| display_width(h)).collect();
    for row in &sheet.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(display_width(cell));
            }
        }
    }

    // "│ " before each cell, " " after, and the closing "│"
    let borders = widths.len() * 3 + 1;

    while widths.iter().sum::<usize>() + borders > max_width {
        let Some((widest, _)) = widths.iter().enumerate().filter(|(_, w)| **w > MIN_COLUMN_WIDTH).max_by_key(|(_, w)| **w)
        else {
            break;
        };
        widths[widest] -= 1;
    }

    widths
}

static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Pin the console width instead of querying the terminal
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width);
}

/// Console width override, else terminal width, else 120
pub fn console_width() -> usize {
    if let Some(w) = CONSOLE_WIDTH.get() {
        return *w;
    }
    match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => 120,
    }
}

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate (with "...") or pad `s` to exactly `width` display columns
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }

    let ellipsis = if width >= 3 { "..." } else { "" };
    let budget = width - ellipsis.len();

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(1);
        if used + cw > budget {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push_str(ellipsis);
    used += ellipsis.len();

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
