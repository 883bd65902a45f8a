//! Prompt window state machine.

use super::submit::{handle_submit, SubmitAction};
use log::debug;

/// Lifecycle state of the prompt window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Window visible, waiting for input.
    Open,
    /// "Missing Prompt" warning is up; the window underneath is inert.
    WarningShown,
    /// Terminal.
    Closed,
}

/// Tracks the window state and routes submits through [`handle_submit`].
#[derive(Debug)]
pub struct PromptSession {
    state: DialogState,
    delivery_failed: bool,
}

impl PromptSession {
    pub fn new() -> Self {
        Self {
            state: DialogState::Open,
            delivery_failed: false,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DialogState::Closed
    }

    /// Handle a submit with the current buffer contents.
    ///
    /// Only an `Open` session reacts. An `Emit` moves the session to
    /// `Closed`, so the prompt is printed at most once.
    pub fn submit(&mut self, buffer: &str) -> SubmitAction {
        if self.state != DialogState::Open {
            debug!("Ignoring submit while {:?}", self.state);
            return SubmitAction::NoOp;
        }

        let action = handle_submit(buffer);
        self.state = match action {
            SubmitAction::Emit(_) => DialogState::Closed,
            SubmitAction::Warn => DialogState::WarningShown,
            SubmitAction::NoOp => self.state,
        };
        action
    }

    /// The warning was dismissed; the window accepts input again.
    pub fn dismiss_warning(&mut self) {
        if self.state == DialogState::WarningShown {
            self.state = DialogState::Open;
        }
    }

    /// Record that the emitted prompt never reached its reader.
    pub fn mark_delivery_failed(&mut self) {
        self.delivery_failed = true;
    }

    pub fn delivery_failed(&self) -> bool {
        self.delivery_failed
    }

    /// External close request or teardown after emission.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open() {
        let session = PromptSession::new();
        assert_eq!(session.state(), DialogState::Open);
        assert!(!session.is_closed());
        assert!(!session.delivery_failed());
    }

    #[test]
    fn hello_world_emits_and_closes() {
        let mut session = PromptSession::new();
        assert_eq!(
            session.submit("Hello world"),
            SubmitAction::Emit("Hello world".to_string())
        );
        assert_eq!(session.state(), DialogState::Closed);
    }

    #[test]
    fn blank_submit_shows_warning_then_returns_to_open() {
        for input in ["   ", ""] {
            let mut session = PromptSession::new();
            assert_eq!(session.submit(input), SubmitAction::Warn);
            assert_eq!(session.state(), DialogState::WarningShown);

            session.dismiss_warning();
            assert_eq!(session.state(), DialogState::Open);
        }
    }

    #[test]
    fn warning_is_shown_once_per_submit() {
        let mut session = PromptSession::new();
        assert_eq!(session.submit(" "), SubmitAction::Warn);
        // The modal blocks the button, but a stray activation must not stack
        // a second warning.
        assert_eq!(session.submit(" "), SubmitAction::NoOp);
        assert_eq!(session.state(), DialogState::WarningShown);
    }

    #[test]
    fn retry_after_warning_emits() {
        let mut session = PromptSession::new();
        assert_eq!(session.submit("\n"), SubmitAction::Warn);
        session.dismiss_warning();
        assert_eq!(
            session.submit("  multi\nline\ntext  "),
            SubmitAction::Emit("multi\nline\ntext".to_string())
        );
        assert!(session.is_closed());
    }

    #[test]
    fn external_close_with_unsubmitted_text_emits_nothing() {
        let mut session = PromptSession::new();
        session.close();
        assert!(session.is_closed());
        assert_eq!(session.submit("unsent text"), SubmitAction::NoOp);
    }

    #[test]
    fn close_is_honoured_while_warning_is_up() {
        let mut session = PromptSession::new();
        session.submit("");
        session.close();
        assert!(session.is_closed());
    }

    #[test]
    fn nothing_leaves_closed() {
        let mut session = PromptSession::new();
        session.submit("done");
        session.dismiss_warning();
        assert!(session.is_closed());
        assert_eq!(session.submit("again"), SubmitAction::NoOp);
        assert!(session.is_closed());
    }
}
