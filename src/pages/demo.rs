//! Demo data: a handful of shows, theaters, and one screening so every flow
//! has something to work with on a fresh run.

use std::time::Duration;

use log::info;

use crate::console::{Command, Console, Form, Page};
use crate::core::cinema::Cinema;
use crate::core::screening::{Experience, Screening};
use crate::core::show::{Show, ShowKind};
use crate::core::theater::Theater;
use crate::nav::{EngineError, PageResult};

/// Seed sample data. Also invoked at startup by the `--demo` flag.
pub fn seed(cinema: &mut Cinema) {
    let iron_man = cinema.add_show(Show::new(
        "Iron Man",
        "After being held captive in an Afghan cave, billionaire engineer \
         Tony Stark creates a unique weaponized suit of armor to fight evil.",
        2008,
        Duration::from_secs(126 * 60),
        ShowKind::Movie {
            lead_actor: "Robert Downey Jr.".to_string(),
        },
    ));
    cinema.add_show(Show::new(
        "Spirited Away",
        "A ten-year-old girl wanders into a world ruled by gods and witches.",
        2001,
        Duration::from_secs(125 * 60),
        ShowKind::AnimatedMovie {
            studio: "Studio Ghibli".to_string(),
        },
    ));
    cinema.add_show(Show::new(
        "Stop Making Sense",
        "Talking Heads live at Hollywood's Pantages Theater.",
        1984,
        Duration::from_secs(88 * 60),
        ShowKind::ConcertFilm {
            artist: "Talking Heads".to_string(),
        },
    ));

    let theater_one = cinema.add_theater(Theater::new("Theater 1", 20, 20));
    cinema.add_theater(Theater::new("Theater 2", 20, 15));

    cinema.add_screening(Screening::new(iron_man, theater_one, Experience::Imax));

    info!("demo data seeded");
}

pub fn load_demo(
    cinema: &mut Cinema,
    console: &mut dyn Console,
) -> Result<PageResult, EngineError> {
    seed(cinema);

    let mut page = Page::new("Load Demo Data", "Demo shows and theaters have been loaded!");
    page.add_command(Command::new('C', "Continue", PageResult::ToMainMenu));

    Ok(Form::new(console, page).select("Press C to Continue")?)
}
