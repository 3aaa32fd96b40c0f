//! Theater management pages: listing, add, manage (occupancy, layout,
//! edits), delete.

use std::collections::HashSet;

use crate::console::{
    Command, Console, Form, Page, cmd_main_menu, cmd_return, cmd_section_home,
};
use crate::core::cinema::Cinema;
use crate::core::config::ResolvedConfig;
use crate::core::screening::ScreeningId;
use crate::core::theater::{MAX_COLUMNS, MAX_ROWS, Theater, TheaterId};
use crate::console::render::center;
use crate::nav::{EngineError, NavContext, PageId, PageResult};
use crate::pages::{seat_grid, show_label, try_reply};

const SECTION: &str = "Theater Management";

fn rows_message() -> String {
    format!("Row length must be between 1 and {}!", MAX_ROWS)
}

fn columns_message() -> String {
    format!("Column length must be between 1 and {}!", MAX_COLUMNS)
}

fn working_theater_id(nav: &NavContext) -> Result<TheaterId, EngineError> {
    nav.working_theater
        .ok_or(EngineError::MissingWorkingItem("theater"))
}

fn working_theater<'a>(
    cinema: &'a Cinema,
    nav: &NavContext,
) -> Result<&'a Theater, EngineError> {
    nav.working_theater
        .and_then(|id| cinema.theater(id))
        .ok_or(EngineError::MissingWorkingItem("theater"))
}

pub fn home(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "");
    for (index, theater) in cinema.theaters().iter().enumerate() {
        page.add_listing(format!(
            "[{}] {} ({} rows, {} columns)",
            index + 1,
            theater.name,
            theater.rows(),
            theater.columns()
        ));
    }
    page.add_command(Command::new('A', "Add Theater", PageResult::Next(PageId::AddTheater)));
    page.add_command(Command::new('D', "Delete Theater", PageResult::Next(PageId::DeleteTheater)));
    page.add_command(cmd_return());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        cinema.theaters().len(),
        "Please select a valid theater number!"
    ));
    nav.working_theater = Some(cinema.theaters()[index].id());
    Ok(PageResult::Next(PageId::ManageTheater))
}

pub fn add_theater(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "Add Theater");
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let name = try_reply!(form.read_text("Input Theater Name", "Theater name cannot be empty!"));
    let rows = try_reply!(form.read_int("Input Row Length", 1, i64::from(MAX_ROWS), &rows_message()));
    let columns = try_reply!(form.read_int(
        "Input Column Length",
        1,
        i64::from(MAX_COLUMNS),
        &columns_message()
    ));

    cinema.add_theater(Theater::new(name, rows as u16, columns as u16));
    Ok(PageResult::ToSectionRoot)
}

pub fn manage_theater(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let theater = working_theater(cinema, nav)?;

    let mut page = Page::new(SECTION, format!("Manage Theater: {}", theater.name));
    page.push_body(format!(
        "Dimensions: {} rows x {} columns",
        theater.rows(),
        theater.columns()
    ));
    page.push_body(format!("Total Seats: {}", theater.seat_count()));

    let active = theater.current_screening().and_then(|id| cinema.screening(id));
    match active {
        Some(screening) => {
            page.push_body("{Currently Screening}");
            if let Some(show) = cinema.show(screening.show()) {
                for line in show.long_info() {
                    page.push_body(line);
                }
            }
            page.push_body(format!("Experience Type: {}", screening.experience));
            page.add_option(
                "End Current Screening",
                PageResult::Next(PageId::SetCurrentScreening),
            );
        }
        None => {
            page.push_body("Currently Screening: None");
            page.add_option("Start Screening", PageResult::Next(PageId::SetCurrentScreening));
        }
    }

    page.add_option("Show Seat Layout", PageResult::Next(PageId::TheaterSeatLayout));
    page.add_option(
        "Edit Theater Dimensions",
        PageResult::Next(PageId::EditTheaterDimensions),
    );
    page.add_option("Edit Theater Name", PageResult::Next(PageId::EditTheaterName));
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

/// Seat layout of the working theater. Shows the active screening's
/// reservations when there is one, an all-available grid otherwise.
pub fn seat_layout(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<PageResult, EngineError> {
    let theater = working_theater(cinema, nav)?;

    let empty = HashSet::new();
    let reserved = theater
        .current_screening()
        .and_then(|id| cinema.screening(id))
        .map(|screening| screening.reserved_seat_ids())
        .unwrap_or(&empty);

    let mut page = Page::new(SECTION, format!("Seat Layout for Theater: {}", theater.name));
    for line in seat_grid(theater, reserved, config) {
        page.push_body(center(&line, config.width as usize));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

/// Toggle occupancy: end the active screening if there is one, otherwise
/// pick one of the screenings scheduled here and start it.
pub fn set_current_screening(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_theater_id(nav)?;
    let theater = cinema
        .theater(id)
        .ok_or(EngineError::MissingWorkingItem("theater"))?;

    if theater.current_screening().is_some() {
        cinema
            .end_screening(id)
            .map_err(|e| EngineError::Invariant(e.to_string()))?;
        return Ok(PageResult::Back);
    }

    let mut page = Page::new(
        SECTION,
        format!("Set Current Screening for Theater: {}", theater.name),
    );

    let available: Vec<(ScreeningId, String)> = cinema
        .screenings_in(id)
        .iter()
        .map(|screening| {
            (
                screening.id(),
                format!(
                    "{} | {}",
                    show_label(cinema, screening.show()),
                    screening.experience
                ),
            )
        })
        .collect();

    if available.is_empty() {
        page.set_error("No screening found! Please create one first.");
    }
    for (index, (_, label)) in available.iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, label));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        available.len(),
        "Please select a valid screening number!"
    ));
    cinema
        .start_screening(id, available[index].0)
        .map_err(|e| EngineError::Invariant(e.to_string()))?;
    Ok(PageResult::Back)
}

pub fn edit_name(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_theater_id(nav)?;

    let mut page = Page::new(SECTION, "Edit Theater Name");
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let name = try_reply!(form.read_text("Input New Theater Name", "Theater name cannot be empty!"));

    let theater = cinema
        .theater_mut(id)
        .ok_or(EngineError::MissingWorkingItem("theater"))?;
    theater.name = name;
    Ok(PageResult::Back)
}

pub fn edit_dimensions(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_theater_id(nav)?;

    let mut page = Page::new(SECTION, "Edit Theater Dimensions");
    page.push_body(
        "    Resizing clears every seat reservation of screenings scheduled \
         in this theater — seat IDs from the old layout are discarded!",
    );
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let rows = try_reply!(form.read_int(
        "Input New Row Length",
        1,
        i64::from(MAX_ROWS),
        &rows_message()
    ));
    let columns = try_reply!(form.read_int(
        "Input New Column Length",
        1,
        i64::from(MAX_COLUMNS),
        &columns_message()
    ));

    if !cinema.resize_theater(id, rows as u16, columns as u16) {
        return Err(EngineError::MissingWorkingItem("theater"));
    }
    Ok(PageResult::Back)
}

pub fn delete_theater(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "Delete Theater");
    page.push_body(
        "    This will permanently delete the selected theater from the \
         system, including all associated screenings!",
    );
    for (index, theater) in cinema.theaters().iter().enumerate() {
        page.add_listing(format!(
            "[{}] Theater: {} | Seats: {}",
            index + 1,
            theater.name,
            theater.seat_count()
        ));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        cinema.theaters().len(),
        "Please select a valid theater number!"
    ));
    let id = cinema.theaters()[index].id();
    cinema.delete_theater(id);
    Ok(PageResult::ToSectionRoot)
}
