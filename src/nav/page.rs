//! Page identifiers and navigation results.
//!
//! Every screen the operator can land on has a [`PageId`]; every page visit
//! produces a [`PageResult`] telling the engine how to move through the
//! history stack. The main menu is not a stack entry — it is where the
//! operator is when the stack is empty.

/// Identifier of one page in the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    MainMenu,

    // Show management
    ShowsHome,
    AddShow,
    AddMovie,
    AddAnimatedMovie,
    AddConcertFilm,
    ManageShow,
    EditShow,
    DeleteShow,

    // Theater management
    TheatersHome,
    AddTheater,
    ManageTheater,
    TheaterSeatLayout,
    SetCurrentScreening,
    EditTheaterName,
    EditTheaterDimensions,
    DeleteTheater,

    // Screening management
    ScreeningsHome,
    AddScreening,
    ManageScreening,
    ScreeningSeatLayout,
    AddReservation,
    DeleteReservation,
    EditScreeningShow,
    EditScreeningTheater,
    EditScreeningExperience,
    DeleteScreening,

    LoadDemoData,
}

/// What a page handler wants the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResult {
    /// Push the given page onto the history stack.
    Next(PageId),
    /// Pop one entry; no-op when the stack is already empty.
    Back,
    /// Pop until exactly one entry (the section's root page) remains;
    /// no-op when fewer than two entries are on the stack.
    ToSectionRoot,
    /// Clear the whole stack, landing on the main menu.
    ToMainMenu,
    /// Terminate the engine loop.
    Exit,
}
