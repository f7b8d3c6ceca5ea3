//! The form — ratatui TUI presentation layer.
//!
//! Renders the catalog as four sections (course types, courses, offerings,
//! registrations) and turns key presses into catalog actions.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state. The model owns one `Session`
//! snapshot and swaps it for the one each action returns.

pub mod app;
pub mod dashboard;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
