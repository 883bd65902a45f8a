//! Prompt Input
//!
//! Opens a small window, lets the user type a prompt, and prints the
//! submitted text to standard output.

mod config;
mod core;
mod ui;

use gtk4::glib;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> glib::ExitCode {
    // Logs go to stderr; stdout is reserved for the prompt.
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Failed to initialize logger: {e}");
    }

    match ui::app::run() {
        Ok(()) => glib::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            glib::ExitCode::FAILURE
        }
    }
}
