//! # Console Adapter
//!
//! The line-based terminal layer. Handles screen drawing and raw line input,
//! and nothing else — pages describe themselves as [`Page`] values and read
//! typed input through [`Form`], so the domain and navigation code never
//! touch the terminal.
//!
//! The [`Console`] trait is the seam: the binary uses [`TerminalConsole`],
//! tests use a scripted implementation that replays canned input lines.

pub mod input;
pub mod page;
pub mod render;

use std::io;

pub use input::{Form, Reply};
pub use page::{Choice, Command, Page, cmd_main_menu, cmd_quit, cmd_return, cmd_section_home};
pub use render::TerminalConsole;

/// One screenful of interaction: draw a page, then read lines against it.
pub trait Console {
    /// Draw the page, replacing whatever was on screen.
    fn present(&mut self, page: &Page) -> io::Result<()>;

    /// Show a prompt label and read one line, trimmed. Must fail (not block
    /// or return empty forever) when the input source is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<String>;
}
