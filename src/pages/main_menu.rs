//! The main menu — the page shown whenever the history stack is empty.

use crate::console::{Console, Form, Page, cmd_quit};
use crate::nav::{EngineError, PageId, PageResult};

pub fn main_page(console: &mut dyn Console) -> Result<PageResult, EngineError> {
    let mut page = Page::new("Main Menu", "Welcome to the box office!");
    page.add_option("Manage Shows", PageResult::Next(PageId::ShowsHome));
    page.add_option("Manage Screenings", PageResult::Next(PageId::ScreeningsHome));
    page.add_option("Manage Theaters", PageResult::Next(PageId::TheatersHome));
    page.add_option("Load Demo Data", PageResult::Next(PageId::LoadDemoData));
    page.add_command(cmd_quit());

    Ok(Form::new(console, page).select("Input Option")?)
}
