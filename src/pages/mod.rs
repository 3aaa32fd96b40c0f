//! # Page Handlers and Engine Loop
//!
//! One function per page of the menu tree, grouped by section, plus the loop
//! that drives them: dispatch on the page at the top of the history stack,
//! let the handler present/prompt/mutate, then apply its [`PageResult`].
//!
//! Handlers read and mutate the [`Cinema`] aggregate and the [`NavContext`]
//! working items; they never touch the history stack directly.

pub mod demo;
pub mod main_menu;
pub mod screenings;
pub mod shows;
pub mod theaters;

use std::collections::HashSet;

use log::{debug, info};

use crate::console::Console;
use crate::core::cinema::Cinema;
use crate::core::config::ResolvedConfig;
use crate::core::show::ShowId;
use crate::core::theater::{Theater, TheaterId, column_letter, seat_id};
use crate::nav::{EngineError, Flow, NavContext, PageId, PageResult};

/// Unwrap a form reply, returning early with the navigation result when the
/// operator answered a prompt with a command token instead of a value.
macro_rules! try_reply {
    ($reply:expr) => {
        match $reply? {
            crate::console::Reply::Value(value) => value,
            crate::console::Reply::Nav(result) => return Ok(result),
        }
    };
}
pub(crate) use try_reply;

/// Run the navigation engine until the operator exits (or a fatal engine
/// error aborts the loop).
pub fn run(
    cinema: &mut Cinema,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<(), EngineError> {
    let mut nav = NavContext::new();
    loop {
        let page = nav.current_page();
        debug!("dispatching {:?} at depth {}", page, nav.history.depth());
        let result = dispatch(page, cinema, &mut nav, console, config)?;
        debug!("{:?} -> {:?}", page, result);
        if nav.apply(result) == Flow::Exit {
            info!("exit requested, stopping engine");
            return Ok(());
        }
    }
}

fn dispatch(
    page: PageId,
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<PageResult, EngineError> {
    match page {
        PageId::MainMenu => main_menu::main_page(console),

        PageId::ShowsHome => shows::home(cinema, nav, console),
        PageId::AddShow => shows::add_show(console),
        PageId::AddMovie => shows::add_movie(cinema, console),
        PageId::AddAnimatedMovie => shows::add_animated_movie(cinema, console),
        PageId::AddConcertFilm => shows::add_concert_film(cinema, console),
        PageId::ManageShow => shows::manage_show(cinema, nav, console),
        PageId::EditShow => shows::edit_show(cinema, nav, console),
        PageId::DeleteShow => shows::delete_show(cinema, console),

        PageId::TheatersHome => theaters::home(cinema, nav, console),
        PageId::AddTheater => theaters::add_theater(cinema, console),
        PageId::ManageTheater => theaters::manage_theater(cinema, nav, console),
        PageId::TheaterSeatLayout => theaters::seat_layout(cinema, nav, console, config),
        PageId::SetCurrentScreening => theaters::set_current_screening(cinema, nav, console),
        PageId::EditTheaterName => theaters::edit_name(cinema, nav, console),
        PageId::EditTheaterDimensions => theaters::edit_dimensions(cinema, nav, console),
        PageId::DeleteTheater => theaters::delete_theater(cinema, console),

        PageId::ScreeningsHome => screenings::home(cinema, nav, console),
        PageId::AddScreening => screenings::add_screening(cinema, console),
        PageId::ManageScreening => screenings::manage_screening(cinema, nav, console),
        PageId::ScreeningSeatLayout => screenings::seat_layout(cinema, nav, console, config),
        PageId::AddReservation => screenings::add_reservation(cinema, nav, console, config),
        PageId::DeleteReservation => screenings::delete_reservation(cinema, nav, console, config),
        PageId::EditScreeningShow => screenings::edit_show(cinema, nav, console),
        PageId::EditScreeningTheater => screenings::edit_theater(cinema, nav, console),
        PageId::EditScreeningExperience => screenings::edit_experience(cinema, nav, console),
        PageId::DeleteScreening => screenings::delete_screening(cinema, console),

        PageId::LoadDemoData => demo::load_demo(cinema, console),
    }
}

/// Render a theater's seat grid as body lines: a column-letter header, then
/// one row per line with availability icons.
pub(crate) fn seat_grid(
    theater: &Theater,
    reserved: &HashSet<String>,
    config: &ResolvedConfig,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(theater.rows() as usize + 1);

    let mut header = String::from("  ");
    for index in 0..theater.columns() {
        header.push(' ');
        header.push(column_letter(index));
    }
    lines.push(header);

    for row in 1..=theater.rows() {
        let mut line = format!("{:2}", row);
        for index in 0..theater.columns() {
            line.push(' ');
            if reserved.contains(&seat_id(row, column_letter(index))) {
                line.push_str(&config.seat_reserved);
            } else {
                line.push_str(&config.seat_available);
            }
        }
        lines.push(line);
    }

    lines
}

/// Listing label for a show reference; the ID always resolves while the
/// aggregate's integrity holds.
pub(crate) fn show_label(cinema: &Cinema, id: ShowId) -> String {
    cinema
        .show(id)
        .map(|show| show.to_string())
        .unwrap_or_else(|| "<unknown show>".to_string())
}

pub(crate) fn theater_label(cinema: &Cinema, id: TheaterId) -> String {
    cinema
        .theater(id)
        .map(|theater| theater.name.clone())
        .unwrap_or_else(|| "<unknown theater>".to_string())
}
