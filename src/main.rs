use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use boxoffice::console::TerminalConsole;
use boxoffice::core::cinema::Cinema;
use boxoffice::core::config;
use boxoffice::pages;

#[derive(Parser)]
#[command(name = "boxoffice", about = "Menu-driven cinema booking administration")]
struct Args {
    /// Seed sample shows, theaters, and a screening at startup
    #[arg(long)]
    demo: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to boxoffice.log in current directory.
    // The terminal itself belongs to the page renderer.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("boxoffice.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("boxoffice starting up");

    let loaded = match config::load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("boxoffice: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&loaded);

    let mut cinema = Cinema::new();
    if args.demo {
        pages::demo::seed(&mut cinema);
    }

    let mut console = TerminalConsole::new(&resolved);
    match pages::run(&mut cinema, &mut console, &resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("fatal: {e}");
            eprintln!("boxoffice: {e}");
            ExitCode::FAILURE
        }
    }
}
