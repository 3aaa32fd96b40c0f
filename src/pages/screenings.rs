//! Screening management pages: listing, add, manage, seat layout, the
//! reservation flows, reference edits, delete.

use crate::console::render::center;
use crate::console::{
    Command, Console, Form, Page, cmd_main_menu, cmd_return, cmd_section_home,
};
use crate::core::cinema::Cinema;
use crate::core::config::ResolvedConfig;
use crate::core::screening::{Experience, Screening, ScreeningId, SeatError};
use crate::core::theater::TheaterId;
use crate::nav::{EngineError, NavContext, PageId, PageResult};
use crate::pages::{seat_grid, show_label, theater_label, try_reply};

const SECTION: &str = "Screening Management";

fn working_screening_id(nav: &NavContext) -> Result<ScreeningId, EngineError> {
    nav.working_screening
        .ok_or(EngineError::MissingWorkingItem("screening"))
}

fn working_screening<'a>(
    cinema: &'a Cinema,
    nav: &NavContext,
) -> Result<&'a Screening, EngineError> {
    nav.working_screening
        .and_then(|id| cinema.screening(id))
        .ok_or(EngineError::MissingWorkingItem("screening"))
}

/// `Show (Year) - Theater {reserved/total seats} [Currently Screening]`.
fn screening_row(cinema: &Cinema, screening: &Screening) -> String {
    let seats = cinema
        .theater(screening.theater())
        .map(|theater| theater.seat_count())
        .unwrap_or(0);
    let marker = cinema
        .theater(screening.theater())
        .is_some_and(|theater| theater.current_screening() == Some(screening.id()));
    format!(
        "{} - {} {{{}/{} seats}} {}",
        show_label(cinema, screening.show()),
        theater_label(cinema, screening.theater()),
        screening.reserved_seat_ids().len(),
        seats,
        if marker { "[Currently Screening]" } else { "" }
    )
}

fn subtitle_for(cinema: &Cinema, screening: &Screening, prefix: &str) -> String {
    format!(
        "{}: {} | {}",
        prefix,
        show_label(cinema, screening.show()),
        theater_label(cinema, screening.theater())
    )
}

pub fn home(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new("Manage Screenings", "");
    for (index, screening) in cinema.screenings().iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, screening_row(cinema, screening)));
    }
    page.add_command(Command::new(
        'A',
        "Add Screening",
        PageResult::Next(PageId::AddScreening),
    ));
    page.add_command(Command::new(
        'D',
        "Delete Screening",
        PageResult::Next(PageId::DeleteScreening),
    ));
    page.add_command(cmd_return());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        cinema.screenings().len(),
        "Please select a valid screening number!"
    ));
    nav.working_screening = Some(cinema.screenings()[index].id());
    Ok(PageResult::Next(PageId::ManageScreening))
}

/// Three prompts in sequence — theater, show, experience type — with the
/// listing rows swapped between prompts.
pub fn add_screening(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new("Manage Screenings", "Add Screening");
    if cinema.theaters().is_empty() {
        page.set_error("No theater found! Please create one first.");
    }
    for (index, theater) in cinema.theaters().iter().enumerate() {
        page.add_listing(format!(
            "[{}] {} ({} rows, {} columns)",
            index + 1,
            theater.name,
            theater.rows(),
            theater.columns()
        ));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let theater_index = try_reply!(form.read_index(
        "Select Theater",
        cinema.theaters().len(),
        "Please select a valid theater number!"
    ));
    let theater = cinema.theaters()[theater_index].id();

    form.page_mut().listing.clear();
    if cinema.shows().is_empty() {
        form.page_mut().set_error("No show found! Please create one first.");
    }
    for (index, show) in cinema.shows().iter().enumerate() {
        form.page_mut()
            .add_listing(format!("[{}] {}", index + 1, show.short_info()));
    }
    let show_index = try_reply!(form.read_index(
        "Select Show",
        cinema.shows().len(),
        "Please select a valid show number!"
    ));
    let show = cinema.shows()[show_index].id();

    form.page_mut().listing.clear();
    for (index, experience) in Experience::ALL.iter().enumerate() {
        form.page_mut()
            .add_listing(format!("[{}] {}", index + 1, experience));
    }
    let experience_index = try_reply!(form.read_index(
        "Select Experience Type",
        Experience::ALL.len(),
        "Please enter a valid experience type number!"
    ));

    cinema.add_screening(Screening::new(
        show,
        theater,
        Experience::ALL[experience_index],
    ));
    Ok(PageResult::ToSectionRoot)
}

pub fn manage_screening(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let screening = working_screening(cinema, nav)?;

    let mut page = Page::new(SECTION, subtitle_for(cinema, screening, "Manage Screening"));

    page.push_body("{Show}");
    if let Some(show) = cinema.show(screening.show()) {
        for line in show.long_info() {
            page.push_body(line);
        }
    }
    page.push_body("");
    page.push_body("{Theater}");
    page.push_body(format!("Theater: {}", theater_label(cinema, screening.theater())));
    let total = cinema
        .theater(screening.theater())
        .map(|theater| theater.seat_count())
        .unwrap_or(0);
    page.push_body(format!(
        "Reserved: {}/{}",
        screening.reserved_seat_ids().len(),
        total
    ));
    page.push_body(format!("Experience Type: {}", screening.experience));
    let occupancy = match cinema.theater(screening.theater()) {
        Some(theater) if theater.current_screening() == Some(screening.id()) => "Yes",
        Some(theater) if theater.current_screening().is_some() => "Theater is Busy",
        _ => "No",
    };
    page.push_body(format!("Currently Screening: {}", occupancy));

    page.add_command(Command::new(
        'S',
        "Show Seat Reservation Layout",
        PageResult::Next(PageId::ScreeningSeatLayout),
    ));
    page.add_command(Command::new(
        'A',
        "Add Seat Reservation",
        PageResult::Next(PageId::AddReservation),
    ));
    page.add_command(Command::new(
        'D',
        "Delete Seat Reservation",
        PageResult::Next(PageId::DeleteReservation),
    ));
    page.add_command(Command::new(
        'F',
        "Edit Show",
        PageResult::Next(PageId::EditScreeningShow),
    ));
    page.add_command(Command::new(
        'G',
        "Edit Theater",
        PageResult::Next(PageId::EditScreeningTheater),
    ));
    page.add_command(Command::new(
        'H',
        "Edit Experience Type",
        PageResult::Next(PageId::EditScreeningExperience),
    ));
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

fn reservation_grid(
    cinema: &Cinema,
    screening: &Screening,
    config: &ResolvedConfig,
) -> Result<Vec<String>, EngineError> {
    let theater = cinema
        .theater(screening.theater())
        .ok_or(EngineError::MissingWorkingItem("theater"))?;
    Ok(seat_grid(theater, screening.reserved_seat_ids(), config)
        .into_iter()
        .map(|line| center(&line, config.width as usize))
        .collect())
}

pub fn seat_layout(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<PageResult, EngineError> {
    let screening = working_screening(cinema, nav)?;

    let mut page = Page::new(SECTION, subtitle_for(cinema, screening, "Seat Layout"));
    for line in reservation_grid(cinema, screening, config)? {
        page.push_body(line);
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

/// Shared column+row prompt loop for the two reservation pages. `reserve`
/// picks between reserving and releasing.
fn reservation_flow(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
    reserve: bool,
) -> Result<PageResult, EngineError> {
    let id = working_screening_id(nav)?;
    let screening = cinema
        .screening(id)
        .ok_or(EngineError::MissingWorkingItem("screening"))?;
    let theater = cinema
        .theater(screening.theater())
        .ok_or(EngineError::MissingWorkingItem("theater"))?;
    let (rows, last_column) = (theater.rows(), theater.last_column());

    let prefix = if reserve {
        "Add Seat Reservation"
    } else {
        "Delete Seat Reservation"
    };
    let mut page = Page::new(SECTION, subtitle_for(cinema, screening, prefix));
    for line in reservation_grid(cinema, screening, config)? {
        page.push_body(line);
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    let column_message = format!(
        "Please select a valid column between A and {}!",
        last_column
    );
    let row_message = format!("Please select a valid row number between 1 and {}!", rows);

    let mut form = Form::new(console, page);
    loop {
        let column = try_reply!(form.read_column("Input Column", last_column, &column_message));
        let row = try_reply!(form.read_int("Input Row", 1, i64::from(rows), &row_message));

        let outcome = if reserve {
            cinema.reserve_seat(id, row as u16, column)
        } else {
            cinema.release_seat(id, row as u16, column)
        };
        match outcome {
            Ok(()) => return Ok(PageResult::Back),
            Err(SeatError::SeatConflict(seat)) if reserve => {
                form.page_mut()
                    .set_error(format!("'{}' is already reserved!", seat));
            }
            Err(SeatError::SeatConflict(seat)) => {
                form.page_mut().set_error(format!("'{}' is not reserved!", seat));
            }
            Err(SeatError::InvalidSeat(seat)) => {
                form.page_mut()
                    .set_error(format!("'{}' is not a valid seat!", seat));
            }
        }
    }
}

pub fn add_reservation(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<PageResult, EngineError> {
    reservation_flow(cinema, nav, console, config, true)
}

pub fn delete_reservation(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
    config: &ResolvedConfig,
) -> Result<PageResult, EngineError> {
    reservation_flow(cinema, nav, console, config, false)
}

pub fn edit_show(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_screening_id(nav)?;
    let screening = cinema
        .screening(id)
        .ok_or(EngineError::MissingWorkingItem("screening"))?;

    let mut page = Page::new(SECTION, subtitle_for(cinema, screening, "Edit Show"));
    for (index, show) in cinema.shows().iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, show.short_info()));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Select Show",
        cinema.shows().len(),
        "Please select a valid show number!"
    ));
    let show = cinema.shows()[index].id();
    cinema.reassign_screening_show(id, show);
    Ok(PageResult::Back)
}

pub fn edit_theater(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_screening_id(nav)?;
    let screening = cinema
        .screening(id)
        .ok_or(EngineError::MissingWorkingItem("screening"))?;

    let mut page = Page::new(SECTION, subtitle_for(cinema, screening, "Edit Theater"));
    page.push_body(
        "    Moving the screening to another theater clears its seat \
         reservations — seat IDs only mean something in the theater they \
         were made for!",
    );
    for (index, theater) in cinema.theaters().iter().enumerate() {
        page.add_listing(format!(
            "[{}] {} ({} rows, {} columns)",
            index + 1,
            theater.name,
            theater.rows(),
            theater.columns()
        ));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Select Theater",
        cinema.theaters().len(),
        "Please select a valid theater number!"
    ));
    let theater: TheaterId = cinema.theaters()[index].id();
    cinema.reassign_screening_theater(id, theater);
    Ok(PageResult::Back)
}

pub fn edit_experience(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_screening_id(nav)?;
    let screening = cinema
        .screening(id)
        .ok_or(EngineError::MissingWorkingItem("screening"))?;

    let mut page = Page::new(
        SECTION,
        subtitle_for(cinema, screening, "Edit Experience Type"),
    );
    for (index, experience) in Experience::ALL.iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, experience));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Select Experience Type",
        Experience::ALL.len(),
        "Please enter a valid experience type number!"
    ));
    cinema.set_experience(id, Experience::ALL[index]);
    Ok(PageResult::Back)
}

pub fn delete_screening(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new("Manage Screenings", "Delete Screening");
    page.push_body("    This will permanently delete the selected screening from the system!");
    for (index, screening) in cinema.screenings().iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, screening_row(cinema, screening)));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Select Screening to Delete",
        cinema.screenings().len(),
        "Please select a valid screening number!"
    ));
    let id = cinema.screenings()[index].id();
    cinema.delete_screening(id);
    Ok(PageResult::ToSectionRoot)
}
