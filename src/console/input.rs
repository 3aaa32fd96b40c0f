//! Prompt forms: the retryable bridge between raw lines and typed values.
//!
//! A [`Form`] owns a [`Page`] and a console. Every read presents the page,
//! prompts, and parses; malformed or out-of-range input sets the page's
//! error message and re-prompts. Any prompt can instead be answered with one
//! of the page's command tokens, which short-circuits the whole flow with a
//! [`Reply::Nav`] — that is how "Return"/"Main Menu" work mid-form.

use std::io;

use crate::console::page::Page;
use crate::console::Console;
use crate::nav::PageResult;

/// Outcome of a single prompt: a parsed value, or a navigation command that
/// aborts the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Nav(PageResult),
}

pub struct Form<'a> {
    console: &'a mut dyn Console,
    page: Page,
}

impl<'a> Form<'a> {
    pub fn new(console: &'a mut dyn Console, page: Page) -> Self {
        Self { console, page }
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Match `input` against the page's command tokens. Option and number
    /// prompts match case-insensitively; free-text prompts require the exact
    /// uppercase token so that ordinary words are never swallowed.
    fn match_command(&self, input: &str, case_sensitive: bool) -> Option<PageResult> {
        let mut chars = input.chars();
        let (first, rest) = (chars.next()?, chars.next());
        if rest.is_some() {
            return None;
        }
        self.page
            .commands
            .iter()
            .find(|c| {
                if case_sensitive {
                    first == c.token
                } else {
                    first.eq_ignore_ascii_case(&c.token)
                }
            })
            .map(|c| c.result)
    }

    /// Record an accepted input so redraws echo it, and clear any error.
    fn accept(&mut self, label: &str, value: &str) {
        self.page.inputs.push(format!("{}: {}", label, value));
        self.page.error = None;
    }

    /// Choose among the page's numbered options and commands. Re-prompts
    /// until the input resolves.
    pub fn select(&mut self, label: &str) -> io::Result<PageResult> {
        loop {
            self.console.present(&self.page)?;
            let input = self.console.prompt(label)?;
            if let Some(result) = self.match_command(&input, false) {
                return Ok(result);
            }
            if let Ok(number) = input.parse::<usize>() {
                if (1..=self.page.options.len()).contains(&number) {
                    return Ok(self.page.options[number - 1].result);
                }
            }
            self.page.set_error("Please enter a valid option!");
        }
    }

    /// Read a 1-based index into a listing of `count` rows, returned
    /// zero-based.
    pub fn read_index(
        &mut self,
        label: &str,
        count: usize,
        message: &str,
    ) -> io::Result<Reply<usize>> {
        loop {
            self.console.present(&self.page)?;
            let input = self.console.prompt(label)?;
            if let Some(result) = self.match_command(&input, false) {
                return Ok(Reply::Nav(result));
            }
            if let Ok(number) = input.parse::<usize>() {
                if (1..=count).contains(&number) {
                    self.accept(label, &input);
                    return Ok(Reply::Value(number - 1));
                }
            }
            self.page.set_error(message);
        }
    }

    /// Read an integer in `min..=max`.
    pub fn read_int(
        &mut self,
        label: &str,
        min: i64,
        max: i64,
        message: &str,
    ) -> io::Result<Reply<i64>> {
        loop {
            self.console.present(&self.page)?;
            let input = self.console.prompt(label)?;
            if let Some(result) = self.match_command(&input, false) {
                return Ok(Reply::Nav(result));
            }
            if let Ok(number) = input.parse::<i64>() {
                if (min..=max).contains(&number) {
                    self.accept(label, &input);
                    return Ok(Reply::Value(number));
                }
            }
            self.page.set_error(message);
        }
    }

    /// Read a non-empty line of free text.
    pub fn read_text(&mut self, label: &str, message: &str) -> io::Result<Reply<String>> {
        loop {
            self.console.present(&self.page)?;
            let input = self.console.prompt(label)?;
            if let Some(result) = self.match_command(&input, true) {
                return Ok(Reply::Nav(result));
            }
            if !input.trim().is_empty() {
                self.accept(label, &input);
                return Ok(Reply::Value(input));
            }
            self.page.set_error(message);
        }
    }

    /// Read a line of free text; an empty line is a valid (empty) value.
    pub fn read_text_allow_empty(&mut self, label: &str) -> io::Result<Reply<String>> {
        self.console.present(&self.page)?;
        let input = self.console.prompt(label)?;
        if let Some(result) = self.match_command(&input, true) {
            return Ok(Reply::Nav(result));
        }
        self.accept(label, &input);
        Ok(Reply::Value(input))
    }

    /// Read a single column letter in `'A'..=max`, case-insensitive.
    pub fn read_column(
        &mut self,
        label: &str,
        max: char,
        message: &str,
    ) -> io::Result<Reply<char>> {
        loop {
            self.console.present(&self.page)?;
            let input = self.console.prompt(label)?;
            if let Some(result) = self.match_command(&input, true) {
                return Ok(Reply::Nav(result));
            }
            let mut chars = input.chars();
            if let (Some(first), None) = (chars.next(), chars.next()) {
                let upper = first.to_ascii_uppercase();
                if ('A'..=max).contains(&upper) {
                    self.accept(label, &input);
                    return Ok(Reply::Value(upper));
                }
            }
            self.page.set_error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::page::{cmd_quit, cmd_return};
    use crate::nav::PageId;
    use crate::test_support::ScriptedConsole;

    fn page_with_commands() -> Page {
        let mut page = Page::new("Test", "");
        page.add_command(cmd_return());
        page.add_command(cmd_quit());
        page
    }

    #[test]
    fn test_select_resolves_option_number() {
        let mut console = ScriptedConsole::new(&["2"]);
        let mut page = page_with_commands();
        page.add_option("first", PageResult::Back);
        page.add_option("second", PageResult::Next(PageId::AddShow));
        let mut form = Form::new(&mut console, page);
        assert_eq!(
            form.select("Input Option").unwrap(),
            PageResult::Next(PageId::AddShow)
        );
    }

    #[test]
    fn test_select_reprompts_on_garbage() {
        let mut console = ScriptedConsole::new(&["zap", "0", "1"]);
        let mut page = page_with_commands();
        page.add_option("only", PageResult::Back);
        let mut form = Form::new(&mut console, page);
        assert_eq!(form.select("Input Option").unwrap(), PageResult::Back);
        // One present per attempt.
        assert_eq!(console.pages.len(), 3);
        assert!(console.pages[1].error.is_some());
    }

    #[test]
    fn test_select_accepts_lowercase_command() {
        let mut console = ScriptedConsole::new(&["q"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(form.select("Input Option").unwrap(), PageResult::Exit);
    }

    #[test]
    fn test_read_index_bounds_and_zero_base() {
        let mut console = ScriptedConsole::new(&["4", "3"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_index("Input Option", 3, "bad").unwrap(),
            Reply::Value(2)
        );
    }

    #[test]
    fn test_read_index_with_empty_listing_only_commands_resolve() {
        let mut console = ScriptedConsole::new(&["1", "R"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_index("Input Option", 0, "bad").unwrap(),
            Reply::Nav(PageResult::Back)
        );
    }

    #[test]
    fn test_read_int_range() {
        let mut console = ScriptedConsole::new(&["1499", "3001", "x", "2024"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_int("Year", 1500, 3000, "bad year").unwrap(),
            Reply::Value(2024)
        );
        assert_eq!(console.pages.len(), 4);
    }

    #[test]
    fn test_read_text_rejects_empty_then_accepts() {
        let mut console = ScriptedConsole::new(&["", "  ", "Heat"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_text("Title", "Title cannot be empty!").unwrap(),
            Reply::Value("Heat".to_string())
        );
    }

    #[test]
    fn test_read_text_command_is_case_sensitive() {
        // Lowercase "r" is a plausible free-text value; only the exact
        // uppercase token navigates.
        let mut console = ScriptedConsole::new(&["r"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_text("Title", "empty").unwrap(),
            Reply::Value("r".to_string())
        );

        let mut console = ScriptedConsole::new(&["R"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_text("Title", "empty").unwrap(),
            Reply::Nav(PageResult::Back)
        );
    }

    #[test]
    fn test_read_text_allow_empty_accepts_blank() {
        let mut console = ScriptedConsole::new(&[""]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_text_allow_empty("Description").unwrap(),
            Reply::Value(String::new())
        );
    }

    #[test]
    fn test_read_column_uppercases_and_bounds() {
        let mut console = ScriptedConsole::new(&["d", "ab", "b"]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert_eq!(
            form.read_column("Column", 'C', "bad column").unwrap(),
            Reply::Value('B')
        );
    }

    #[test]
    fn test_script_exhaustion_is_an_io_error() {
        let mut console = ScriptedConsole::new(&[]);
        let mut form = Form::new(&mut console, page_with_commands());
        assert!(form.select("Input Option").is_err());
    }
}
