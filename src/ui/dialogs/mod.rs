//! Dialog windows shown on top of the prompt window.
//!
//! - `warning`: modal "Missing Prompt" notice for blank submits

pub mod warning;
