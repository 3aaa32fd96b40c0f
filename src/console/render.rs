//! Terminal rendering of a [`Page`].
//!
//! This is the only file that writes to the terminal. Each `present` clears
//! the screen and redraws the whole page — pages are small and the redraw
//! keeps error messages and echoed inputs in one stable layout.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use unicode_width::UnicodeWidthStr;

use crate::console::page::Page;
use crate::console::Console;
use crate::core::config::ResolvedConfig;

/// Center `text` within `width` columns, display-width aware.
pub fn center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    format!("{}{}", " ".repeat(left), text)
}

pub struct TerminalConsole {
    width: usize,
}

impl TerminalConsole {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            width: config.width as usize,
        }
    }
}

impl Console for TerminalConsole {
    fn present(&mut self, page: &Page) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

        writeln!(out, "{}", "=".repeat(self.width))?;
        writeln!(out, "{}", center(&page.title, self.width).bold())?;
        if !page.subtitle.is_empty() {
            writeln!(out, "{}", center(&page.subtitle, self.width))?;
        }
        writeln!(out, "{}", "-".repeat(self.width))?;

        if let Some(error) = &page.error {
            let banner = format!("## {} ##", error);
            writeln!(out, "{}", center(&banner, self.width).red())?;
        }

        for line in &page.body {
            if UnicodeWidthStr::width(line.as_str()) > self.width {
                for wrapped in textwrap::wrap(line, self.width) {
                    writeln!(out, "{}", wrapped)?;
                }
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        if !page.body.is_empty() {
            writeln!(out)?;
        }

        let pad = " ".repeat(self.width / 10);

        for (index, option) in page.options.iter().enumerate() {
            writeln!(out, "{}[{}] {}", pad, index + 1, option.label)?;
        }
        for row in &page.listing {
            writeln!(out, "{}{}", pad, row)?;
        }
        for command in &page.commands {
            writeln!(out, "{}[{}] {}", pad, command.token, command.label)?;
        }

        for input in &page.inputs {
            writeln!(out, "  {}", input.as_str().dim())?;
        }

        writeln!(out, "{}", "-".repeat(self.width))?;
        out.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        let mut out = io::stdout();
        write!(out, "  >> {}: ", label)?;
        out.flush()?;

        let mut line = String::new();
        // 0 bytes read means stdin closed; surface it so the engine aborts
        // instead of re-prompting forever.
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }
}
