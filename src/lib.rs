//! coursedesk — course types, courses, offerings, and student
//! registrations, kept in memory and edited in the terminal.
//!
//! The catalog is a plain value: every mutation hands back a new
//! snapshot. The TUI owns the current one.

pub mod catalog;
pub mod config;
pub mod error;
pub mod tui;
