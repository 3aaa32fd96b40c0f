//! Show management pages: listing, the three add flows, manage/edit, delete.

use std::time::Duration;

use crate::console::{
    Command, Console, Form, Page, cmd_main_menu, cmd_return, cmd_section_home,
};
use crate::core::cinema::Cinema;
use crate::core::show::{
    MAX_DURATION_MINUTES, MAX_RELEASE_YEAR, MIN_DURATION_MINUTES, MIN_RELEASE_YEAR, Show, ShowId,
    ShowKind,
};
use crate::nav::{EngineError, NavContext, PageId, PageResult};
use crate::pages::try_reply;

const SECTION: &str = "Show Management";

fn year_message() -> String {
    format!(
        "Please enter a valid year between {} and {}!",
        MIN_RELEASE_YEAR, MAX_RELEASE_YEAR
    )
}

fn duration_message() -> String {
    format!(
        "Please enter a duration between {} and {} minutes!",
        MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
    )
}

fn working_show_id(nav: &NavContext) -> Result<ShowId, EngineError> {
    nav.working_show.ok_or(EngineError::MissingWorkingItem("show"))
}

/// Section home: every show listed, pick one to manage it.
pub fn home(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "");
    for (index, show) in cinema.shows().iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, show.short_info()));
    }
    page.add_command(Command::new('A', "Add Show", PageResult::Next(PageId::AddShow)));
    page.add_command(Command::new('D', "Delete Show", PageResult::Next(PageId::DeleteShow)));
    page.add_command(cmd_return());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        cinema.shows().len(),
        "Please select a valid show number!"
    ));
    nav.working_show = Some(cinema.shows()[index].id());
    Ok(PageResult::Next(PageId::ManageShow))
}

/// Type selection for the add flow.
pub fn add_show(console: &mut dyn Console) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "Add Show: Select Show Type");
    page.add_option("Standard Movie", PageResult::Next(PageId::AddMovie));
    page.add_option("Animated Movie", PageResult::Next(PageId::AddAnimatedMovie));
    page.add_option("Concert Film", PageResult::Next(PageId::AddConcertFilm));
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

fn add_form<'a>(console: &'a mut dyn Console, subtitle: &str) -> Form<'a> {
    let mut page = Page::new(SECTION, subtitle);
    page.add_command(cmd_return());
    page.add_command(cmd_section_home(SECTION));
    page.add_command(cmd_main_menu());
    Form::new(console, page)
}

pub fn add_movie(cinema: &mut Cinema, console: &mut dyn Console) -> Result<PageResult, EngineError> {
    let mut form = add_form(console, "Add Movie");

    let title = try_reply!(form.read_text("Input Title", "Title cannot be empty!"));
    let description = try_reply!(form.read_text_allow_empty("Input Description"));
    let year = try_reply!(form.read_int(
        "Input Release Year",
        MIN_RELEASE_YEAR,
        MAX_RELEASE_YEAR,
        &year_message()
    ));
    let minutes = try_reply!(form.read_int(
        "Input Duration (in minutes)",
        MIN_DURATION_MINUTES,
        MAX_DURATION_MINUTES,
        &duration_message()
    ));
    let lead_actor = try_reply!(form.read_text("Input Lead Actor", "Lead actor cannot be empty!"));

    cinema.add_show(Show::new(
        title,
        description,
        year,
        Duration::from_secs(minutes as u64 * 60),
        ShowKind::Movie { lead_actor },
    ));
    Ok(PageResult::ToSectionRoot)
}

pub fn add_animated_movie(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut form = add_form(console, "Add Animated Movie");

    let title = try_reply!(form.read_text("Input Title", "Title cannot be empty!"));
    let description = try_reply!(form.read_text_allow_empty("Input Description"));
    let year = try_reply!(form.read_int(
        "Input Release Year",
        MIN_RELEASE_YEAR,
        MAX_RELEASE_YEAR,
        &year_message()
    ));
    let studio = try_reply!(form.read_text(
        "Input Animation Studio",
        "Animation studio cannot be empty!"
    ));
    let minutes = try_reply!(form.read_int(
        "Input Duration (in minutes)",
        MIN_DURATION_MINUTES,
        MAX_DURATION_MINUTES,
        &duration_message()
    ));

    cinema.add_show(Show::new(
        title,
        description,
        year,
        Duration::from_secs(minutes as u64 * 60),
        ShowKind::AnimatedMovie { studio },
    ));
    Ok(PageResult::ToSectionRoot)
}

pub fn add_concert_film(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut form = add_form(console, "Add Concert Film");

    let title = try_reply!(form.read_text("Input Title", "Title cannot be empty!"));
    let description = try_reply!(form.read_text_allow_empty("Input Description"));
    let year = try_reply!(form.read_int(
        "Input Release Year",
        MIN_RELEASE_YEAR,
        MAX_RELEASE_YEAR,
        &year_message()
    ));
    let minutes = try_reply!(form.read_int(
        "Input Duration (in minutes)",
        MIN_DURATION_MINUTES,
        MAX_DURATION_MINUTES,
        &duration_message()
    ));
    let artist = try_reply!(form.read_text("Input Artist Name", "Artist name cannot be empty!"));

    cinema.add_show(Show::new(
        title,
        description,
        year,
        Duration::from_secs(minutes as u64 * 60),
        ShowKind::ConcertFilm { artist },
    ));
    Ok(PageResult::ToSectionRoot)
}

/// Details view for the working show.
pub fn manage_show(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_show_id(nav)?;
    let show = cinema
        .show(id)
        .ok_or(EngineError::MissingWorkingItem("show"))?;

    let mut page = Page::new(SECTION, format!("Manage Show: {}", show));
    for line in show.long_info() {
        page.push_body(line);
    }
    page.add_option("Edit Details", PageResult::Next(PageId::EditShow));
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    Ok(Form::new(console, page).select("Input Option")?)
}

/// Re-prompt every field of the working show, including the kind-specific
/// one. The kind itself is fixed at creation.
pub fn edit_show(
    cinema: &mut Cinema,
    nav: &mut NavContext,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let id = working_show_id(nav)?;
    let (subtitle, variant_prompt, variant_message) = {
        let show = cinema
            .show(id)
            .ok_or(EngineError::MissingWorkingItem("show"))?;
        let (prompt, message) = match show.kind {
            ShowKind::Movie { .. } => ("Input Lead Actor", "Lead actor cannot be empty!"),
            ShowKind::AnimatedMovie { .. } => {
                ("Input Animation Studio", "Animation studio cannot be empty!")
            }
            ShowKind::ConcertFilm { .. } => ("Input Artist Name", "Artist name cannot be empty!"),
        };
        (format!("Edit Show: {}", show), prompt, message)
    };

    let mut form = add_form(console, &subtitle);
    let title = try_reply!(form.read_text("Input Title", "Title cannot be empty!"));
    let description = try_reply!(form.read_text_allow_empty("Input Description"));
    let year = try_reply!(form.read_int(
        "Input Release Year",
        MIN_RELEASE_YEAR,
        MAX_RELEASE_YEAR,
        &year_message()
    ));
    let minutes = try_reply!(form.read_int(
        "Input Duration (in minutes)",
        MIN_DURATION_MINUTES,
        MAX_DURATION_MINUTES,
        &duration_message()
    ));
    let variant_value = try_reply!(form.read_text(variant_prompt, variant_message));

    let show = cinema
        .show_mut(id)
        .ok_or(EngineError::MissingWorkingItem("show"))?;
    show.title = title;
    show.description = description;
    show.release_year = year;
    show.duration = Duration::from_secs(minutes as u64 * 60);
    match &mut show.kind {
        ShowKind::Movie { lead_actor } => *lead_actor = variant_value,
        ShowKind::AnimatedMovie { studio } => *studio = variant_value,
        ShowKind::ConcertFilm { artist } => *artist = variant_value,
    }
    Ok(PageResult::Back)
}

pub fn delete_show(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    let mut page = Page::new(SECTION, "Delete Show");
    page.push_body(
        "    This will permanently delete the selected show from the system, \
         including all associated screenings!",
    );
    for (index, show) in cinema.shows().iter().enumerate() {
        page.add_listing(format!("[{}] {}", index + 1, show));
    }
    page.add_command(cmd_return());
    page.add_command(cmd_main_menu());

    let mut form = Form::new(console, page);
    let index = try_reply!(form.read_index(
        "Input Option",
        cinema.shows().len(),
        "Please select a valid show number!"
    ));
    let id = cinema.shows()[index].id();
    cinema.delete_show(id);
    Ok(PageResult::Back)
}
