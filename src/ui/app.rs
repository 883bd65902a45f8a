//! Application setup and the blocking `run` entry point.

use crate::config;
use crate::ui::prompt_dialog::PromptDialog;
use adw::prelude::*;
use adw::Application;
use anyhow::{bail, Context, Result};
use gtk4::{gio, glib};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Open the prompt window and block until it is closed.
///
/// A submitted prompt has already been written to stdout by the time this
/// returns. Errors mean GTK could not run or the prompt could not be
/// delivered.
pub fn run() -> Result<()> {
    info!("Initializing application components");

    gio::resources_register_include!("prompt-input.gresource")
        .context("Failed to register gresources")?;

    // Each invocation serves its own consumer, so instances must not merge.
    let app = Application::builder()
        .application_id(config::APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let opened: Rc<RefCell<Option<Rc<PromptDialog>>>> = Rc::default();
    {
        let opened = Rc::clone(&opened);
        app.connect_activate(move |app| {
            let mut opened = opened.borrow_mut();
            if opened.is_none() {
                *opened = Some(PromptDialog::open(app));
            }
        });
    }

    // GTK must not interpret our arguments; the program takes none.
    let status = app.run_with_args::<&str>(&[]);
    if status != glib::ExitCode::SUCCESS {
        bail!("GTK application exited abnormally");
    }

    if let Some(dialog) = opened.borrow().as_ref() {
        dialog.finish()?;
    }

    info!("Prompt window session finished");
    Ok(())
}
