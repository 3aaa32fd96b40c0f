//! The structured page model handed to the renderer.
//!
//! A page is everything one screen shows: headings, body lines, an optional
//! error, numbered options, fixed listing rows, and the lettered commands
//! that are accepted at any prompt on the page. The renderer turns this into
//! text; nothing here touches the terminal.

use crate::nav::PageResult;

/// A numbered, selectable option: entering its 1-based index yields `result`.
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub result: PageResult,
}

/// A lettered command available at every prompt on the page, e.g.
/// `[R] Return`. Entering the token (case rules are per-prompt) yields
/// `result` instead of a value.
#[derive(Debug, Clone)]
pub struct Command {
    pub token: char,
    pub label: String,
    pub result: PageResult,
}

impl Command {
    pub fn new(token: char, label: impl Into<String>, result: PageResult) -> Self {
        Self {
            token: token.to_ascii_uppercase(),
            label: label.into(),
            result,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub body: Vec<String>,
    /// Fixed display rows (entity listings); selection happens via an index
    /// prompt, not via these rows themselves.
    pub listing: Vec<String>,
    pub options: Vec<Choice>,
    pub commands: Vec<Command>,
    pub error: Option<String>,
    /// Inputs already accepted by the current form, echoed back on redraw.
    pub inputs: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }

    pub fn push_body(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    pub fn add_listing(&mut self, line: impl Into<String>) {
        self.listing.push(line.into());
    }

    pub fn add_option(&mut self, label: impl Into<String>, result: PageResult) {
        self.options.push(Choice {
            label: label.into(),
            result,
        });
    }

    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

// The standard navigation commands, shared across sections so every page
// spells them the same way.

pub fn cmd_return() -> Command {
    Command::new('R', "Return", PageResult::Back)
}

pub fn cmd_section_home(label: impl Into<String>) -> Command {
    Command::new('E', label, PageResult::ToSectionRoot)
}

pub fn cmd_main_menu() -> Command {
    Command::new('M', "Main Menu", PageResult::ToMainMenu)
}

pub fn cmd_quit() -> Command {
    Command::new('Q', "Quit", PageResult::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_token_is_uppercased() {
        let command = Command::new('r', "Return", PageResult::Back);
        assert_eq!(command.token, 'R');
    }

    #[test]
    fn test_page_builders() {
        let mut page = Page::new("Title", "Sub");
        page.push_body("line");
        page.add_listing("[1] entry");
        page.add_option("Go", PageResult::Back);
        page.add_command(cmd_quit());
        page.set_error("nope");
        assert_eq!(page.body, vec!["line".to_string()]);
        assert_eq!(page.listing.len(), 1);
        assert_eq!(page.options.len(), 1);
        assert_eq!(page.commands[0].token, 'Q');
        assert_eq!(page.error.as_deref(), Some("nope"));
    }
}
