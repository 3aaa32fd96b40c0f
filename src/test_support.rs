//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::console::{Console, Page};

/// A console that replays a fixed script of input lines and records every
/// page it is asked to present. When the script runs out, `prompt` fails
/// with `UnexpectedEof`, mirroring a closed stdin.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub pages: Vec<Page>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|line| line.to_string()).collect(),
            pages: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// The last page presented, for asserting on rendered content.
    pub fn last_page(&self) -> &Page {
        self.pages.last().expect("no page was presented")
    }
}

impl Console for ScriptedConsole {
    fn present(&mut self, page: &Page) -> io::Result<()> {
        self.pages.push(page.clone());
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.prompts.push(label.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}
