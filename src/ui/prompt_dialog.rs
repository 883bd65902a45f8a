//! The prompt window and its lifecycle.

use crate::config::{self, text};
use crate::core::dispatch::{self, SubmitOutcome};
use crate::core::session::PromptSession;
use crate::ui::dialogs::warning;
use adw::prelude::*;
use adw::{Application, ApplicationWindow};
use anyhow::Result;
use gtk4::{glib, Builder, Button, Label, TextView};
use log::{error, info};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Widgets of the bundled prompt window layout.
struct PromptWidgets {
    window: ApplicationWindow,
    label: Label,
    input: TextView,
    submit_button: Button,
}

impl PromptWidgets {
    fn load() -> Self {
        let builder = Builder::from_resource(config::resources::PROMPT_WINDOW);
        Self {
            window: object(&builder, "prompt_window"),
            label: object(&builder, "prompt_label"),
            input: object(&builder, "prompt_input"),
            submit_button: object(&builder, "submit_button"),
        }
    }
}

/// A missing id means the `.ui` file and this module disagree.
fn object<T: IsA<glib::Object>>(builder: &Builder, id: &str) -> T {
    builder.object(id).unwrap_or_else(|| {
        panic!(
            "'{}' has no object with id '{}'",
            config::resources::PROMPT_WINDOW,
            id
        )
    })
}

/// An open prompt window.
///
/// Created with [`PromptDialog::open`] and torn down with
/// [`PromptDialog::close`], either after a successful submit or when the
/// window manager closes it.
pub struct PromptDialog {
    window: ApplicationWindow,
    input: TextView,
    session: RefCell<PromptSession>,
}

impl PromptDialog {
    /// Build the window from the bundled UI, wire its handlers and show it.
    pub fn open(app: &Application) -> Rc<Self> {
        let widgets = PromptWidgets::load();

        widgets.window.set_application(Some(app));
        widgets.window.set_title(Some(text::WINDOW_TITLE));
        widgets
            .window
            .set_default_size(config::window::DEFAULT_WIDTH, config::window::DEFAULT_HEIGHT);
        widgets.label.set_label(text::PROMPT_LABEL);
        widgets.submit_button.set_label(text::SUBMIT_BUTTON);

        let dialog = Rc::new(Self {
            window: widgets.window,
            input: widgets.input,
            session: RefCell::new(PromptSession::new()),
        });
        dialog.connect_handlers(&widgets.submit_button);

        dialog.window.present();
        dialog.input.grab_focus();
        info!("Prompt window opened");

        dialog
    }

    fn connect_handlers(self: &Rc<Self>, submit_button: &Button) {
        let dialog = Rc::downgrade(self);
        submit_button.connect_clicked(move |_| {
            info!("Submit button clicked");
            if let Some(dialog) = dialog.upgrade() {
                dialog.submit();
            }
        });

        let dialog = Rc::downgrade(self);
        self.window.connect_close_request(move |_| {
            if let Some(dialog) = dialog.upgrade() {
                let mut session = dialog.session.borrow_mut();
                if !session.is_closed() {
                    info!(
                        "Prompt window closed from {:?} without submitting",
                        session.state()
                    );
                    session.close();
                }
            }
            glib::Propagation::Proceed
        });
    }

    /// Validate the current text and act on it.
    pub fn submit(self: &Rc<Self>) {
        let buffer = self.input.buffer();
        let contents = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);

        let outcome = dispatch::dispatch(
            &mut self.session.borrow_mut(),
            &contents,
            &mut io::stdout().lock(),
        );
        let closes_window = outcome.closes_window();

        match outcome {
            SubmitOutcome::Delivered | SubmitOutcome::Ignored => {}
            SubmitOutcome::DeliveryFailed(e) => error!("{e:#}"),
            SubmitOutcome::ShowWarning => {
                let dialog = Rc::downgrade(self);
                warning::show_missing_prompt_warning(&self.window, move || {
                    if let Some(dialog) = dialog.upgrade() {
                        dialog.session.borrow_mut().dismiss_warning();
                    }
                });
            }
        }

        if closes_window {
            self.close();
        }
    }

    /// Mark the session closed and destroy the window.
    pub fn close(&self) {
        self.session.borrow_mut().close();
        self.window.destroy();
        info!("Prompt window closed");
    }

    /// Outcome of the session once the window is gone.
    pub fn finish(&self) -> Result<()> {
        dispatch::finish(&self.session.borrow())
    }
}
