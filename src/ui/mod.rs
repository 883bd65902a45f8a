//! GTK user interface.

pub mod app;
pub mod dialogs;
pub mod prompt_dialog;
