//! Application constants.
//!
//! The prompt window has no runtime configuration: no flags, no environment
//! variables, no config file. Everything tunable lives here.

/// Application ID registered with GTK.
pub const APP_ID: &str = "org.promptinput.PromptInput";

/// GResource paths for the bundled UI.
pub mod resources {
    /// Main prompt window layout.
    pub const PROMPT_WINDOW: &str = "/org/promptinput/prompt-input/ui/prompt_window.ui";
}

/// Window geometry in logical pixels.
pub mod window {
    pub const DEFAULT_WIDTH: i32 = 600;
    pub const DEFAULT_HEIGHT: i32 = 300;
}

/// User-visible strings.
pub mod text {
    pub const WINDOW_TITLE: &str = "Prompt Input";
    pub const PROMPT_LABEL: &str = "📝 Enter your prompt below:";
    pub const SUBMIT_BUTTON: &str = "Submit";

    pub const MISSING_PROMPT_HEADING: &str = "Missing Prompt";
    pub const MISSING_PROMPT_BODY: &str = "Please enter a prompt.";
    pub const MISSING_PROMPT_DISMISS: &str = "OK";
}
