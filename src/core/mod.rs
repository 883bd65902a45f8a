//! Toolkit-independent prompt logic.
//!
//! Nothing in here touches GTK, so the submit rules, the dialog state
//! machine and the output path can be exercised without a display.

pub mod dispatch;
pub mod session;
pub mod submit;
