//! TUI messages — everything the update loop reacts to.
//!
//! The runner turns crossterm key events and the tick interval (flash
//! message expiry) into these. Frames are drawn by the runner itself.

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Tick: age transient UI state.
    Tick,
    /// Quit the TUI.
    Quit,
}
