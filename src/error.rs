//! Crate error types.
//!
//! Catalog operations never fail (invalid input is a silent no-op), so
//! everything here is infrastructure: config files and the terminal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("terminal error: {0}")]
    Terminal(String),
}

pub type DeskResult<T> = Result<T, DeskError>;
