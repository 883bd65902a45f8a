//! Carries a submit through to its side effects on the output stream.

use super::session::PromptSession;
use super::submit::{emit, SubmitAction};
use anyhow::{bail, Context, Result};
use std::io::Write;

/// What the window has to do after a submit was dispatched.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The prompt was written.
    Delivered,
    /// The prompt could not be written. The window still closes.
    DeliveryFailed(anyhow::Error),
    /// Blank prompt; show the warning.
    ShowWarning,
    /// The session was not accepting submits.
    Ignored,
}

impl SubmitOutcome {
    pub fn closes_window(&self) -> bool {
        matches!(self, Self::Delivered | Self::DeliveryFailed(_))
    }
}

/// Run a submit against `session`, writing an emitted prompt to `out`.
pub fn dispatch<W: Write>(session: &mut PromptSession, buffer: &str, out: &mut W) -> SubmitOutcome {
    match session.submit(buffer) {
        SubmitAction::Emit(prompt) => {
            match emit(out, &prompt).context("Failed to write prompt to standard output") {
                Ok(()) => SubmitOutcome::Delivered,
                Err(e) => {
                    session.mark_delivery_failed();
                    SubmitOutcome::DeliveryFailed(e)
                }
            }
        }
        SubmitAction::Warn => SubmitOutcome::ShowWarning,
        SubmitAction::NoOp => SubmitOutcome::Ignored,
    }
}

/// Final status of a finished session.
///
/// Closing without submitting is a normal end; only a prompt that was
/// submitted but not written is an error.
pub fn finish(session: &PromptSession) -> Result<()> {
    if session.delivery_failed() {
        bail!("Prompt was not delivered");
    }
    Ok(())
}
