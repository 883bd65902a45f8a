//! Modal warning shown when the user submits a blank prompt.

use crate::config::text;
use adw::prelude::*;
use adw::AlertDialog;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

const DISMISS_RESPONSE: &str = "dismiss";

/// Show the "Missing Prompt" warning over `parent`.
///
/// The dialog is modal: `parent` ignores input until the user dismisses it,
/// after which `on_dismiss` runs exactly once.
pub fn show_missing_prompt_warning<W, F>(parent: &W, on_dismiss: F)
where
    W: IsA<gtk4::Widget>,
    F: FnOnce() + 'static,
{
    debug!("Showing warning dialog: {}", text::MISSING_PROMPT_HEADING);

    let dialog = AlertDialog::new(
        Some(text::MISSING_PROMPT_HEADING),
        Some(text::MISSING_PROMPT_BODY),
    );
    dialog.add_response(DISMISS_RESPONSE, text::MISSING_PROMPT_DISMISS);
    dialog.set_default_response(Some(DISMISS_RESPONSE));
    dialog.set_close_response(DISMISS_RESPONSE);

    // Escape and the OK button both end up here.
    let on_dismiss_rc = Rc::new(RefCell::new(Some(on_dismiss)));
    dialog.connect_closed(move |_| {
        debug!("Warning dialog dismissed");
        if let Some(on_dismiss) = on_dismiss_rc.borrow_mut().take() {
            on_dismiss();
        }
    });

    dialog.present(Some(parent));
}
