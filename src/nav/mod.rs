//! # Navigation Engine
//!
//! The state machine behind the menu tree. Pages never mutate the history
//! stack themselves — they return a [`PageResult`] and the engine applies it
//! here, in one place:
//!
//! ```text
//! NavContext + PageResult  →  apply()  →  next page / exit
//! ```
//!
//! The context also carries the per-section "working item" — the show,
//! theater, or screening an edit flow is currently pointed at. Those
//! references are cleared deterministically whenever a transition leaves the
//! stack at depth ≤ 1, so a stale edit target can never leak into a
//! different navigation path.

pub mod history;
pub mod page;

use std::fmt;
use std::io;

pub use history::History;
pub use page::{PageId, PageResult};

use crate::core::screening::ScreeningId;
use crate::core::show::ShowId;
use crate::core::theater::TheaterId;

/// Whether the engine loop keeps going after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Navigation state passed to every page handler: the history stack plus the
/// working items selected by the section home pages.
#[derive(Debug, Default)]
pub struct NavContext {
    pub history: History,
    pub working_show: Option<ShowId>,
    pub working_theater: Option<TheaterId>,
    pub working_screening: Option<ScreeningId>,
}

impl NavContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> PageId {
        self.history.current()
    }

    /// Apply a page's result to the history stack. Working items are cleared
    /// whenever the resulting depth is ≤ 1 — at the main menu or a section
    /// home, nothing is "being edited" anymore.
    pub fn apply(&mut self, result: PageResult) -> Flow {
        match result {
            PageResult::Next(page) => self.history.push(page),
            PageResult::Back => {
                self.history.pop();
            }
            PageResult::ToSectionRoot => self.history.snap_to_section_root(),
            PageResult::ToMainMenu => self.history.clear(),
            PageResult::Exit => return Flow::Exit,
        }
        if self.history.depth() <= 1 {
            self.clear_working_items();
        }
        Flow::Continue
    }

    pub fn clear_working_items(&mut self) {
        self.working_show = None;
        self.working_theater = None;
        self.working_screening = None;
    }
}

/// Fatal engine conditions. Anything here aborts the run — continuing would
/// either loop forever or operate on state the operator never selected.
#[derive(Debug)]
pub enum EngineError {
    /// Console I/O failed (including end of input on stdin).
    Io(io::Error),
    /// A manage/edit page was entered without its working item being set.
    MissingWorkingItem(&'static str),
    /// A domain precondition the page layer is responsible for upholding was
    /// violated anyway.
    Invariant(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io(e) => write!(f, "console I/O error: {e}"),
            EngineError::MissingWorkingItem(kind) => {
                write!(f, "no working {kind} selected for this page")
            }
            EngineError::Invariant(message) => write!(f, "invariant violation: {message}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_next_pushes() {
        let mut nav = NavContext::new();
        assert_eq!(nav.apply(PageResult::Next(PageId::ShowsHome)), Flow::Continue);
        assert_eq!(nav.current_page(), PageId::ShowsHome);
    }

    #[test]
    fn test_apply_back_pops_and_noops_on_empty() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ShowsHome));
        nav.apply(PageResult::Next(PageId::AddShow));
        nav.apply(PageResult::Back);
        assert_eq!(nav.current_page(), PageId::ShowsHome);
        nav.apply(PageResult::Back);
        nav.apply(PageResult::Back);
        assert_eq!(nav.current_page(), PageId::MainMenu);
    }

    #[test]
    fn test_apply_to_main_menu_clears() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ScreeningsHome));
        nav.apply(PageResult::Next(PageId::ManageScreening));
        nav.apply(PageResult::ToMainMenu);
        assert_eq!(nav.history.depth(), 0);
        assert_eq!(nav.current_page(), PageId::MainMenu);
    }

    #[test]
    fn test_apply_section_root_pops_to_one() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ScreeningsHome));
        nav.apply(PageResult::Next(PageId::ManageScreening));
        nav.apply(PageResult::Next(PageId::AddReservation));
        nav.apply(PageResult::ToSectionRoot);
        assert_eq!(nav.history.entries(), &[PageId::ScreeningsHome]);
    }

    #[test]
    fn test_exit_stops_the_flow() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ShowsHome));
        assert_eq!(nav.apply(PageResult::Exit), Flow::Exit);
        // Exit does not touch the stack; the loop simply stops.
        assert_eq!(nav.current_page(), PageId::ShowsHome);
    }

    #[test]
    fn test_working_items_cleared_at_depth_one_or_less() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ShowsHome));
        nav.working_show = Some(crate::core::show::ShowId::new());
        nav.apply(PageResult::Next(PageId::ManageShow));
        assert!(nav.working_show.is_some());

        // Depth 2 → 1: cleared.
        nav.apply(PageResult::Back);
        assert!(nav.working_show.is_none());

        nav.working_screening = Some(ScreeningId::new());
        nav.apply(PageResult::ToMainMenu);
        assert!(nav.working_screening.is_none());
    }

    #[test]
    fn test_working_items_survive_deep_transitions() {
        let mut nav = NavContext::new();
        nav.apply(PageResult::Next(PageId::ScreeningsHome));
        nav.apply(PageResult::Next(PageId::ManageScreening));
        nav.working_screening = Some(ScreeningId::new());
        nav.apply(PageResult::Next(PageId::AddReservation));
        nav.apply(PageResult::Back);
        // Still at depth 2 — the manage page keeps its target.
        assert!(nav.working_screening.is_some());
    }
}
