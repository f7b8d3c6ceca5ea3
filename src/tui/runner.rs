//! TUI runner — main loop that wires everything together.
//!
//! Creates terminal, runs main TEA loop, restores the terminal on the way
//! out (including on error).

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::interval;
use tracing::{debug, info};

use crate::catalog::Session;
use crate::config::DeskConfig;
use crate::error::{DeskError, DeskResult};

use super::app::TuiApp;
use super::event::TuiMessage;
use super::layout;

/// Raw mode + alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> DeskResult<Self> {
        enable_raw_mode().map_err(|e| DeskError::Terminal(format!("raw mode: {e}")))?;
        io::stdout()
            .execute(EnterAlternateScreen)
            .map_err(|e| DeskError::Terminal(format!("alternate screen: {e}")))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

/// Run the TUI main loop. Blocks until quit and returns the final session.
pub async fn run_tui(mut app: TuiApp, config: &DeskConfig) -> anyhow::Result<Session> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut tick_interval = interval(Duration::from_millis(config.tick_rate_ms));
    let mut render_interval = interval(Duration::from_millis(config.frame_rate_ms));
    let mut events = EventStream::new();

    info!(section = ?app.section, "TUI started");

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                app.update(TuiMessage::Tick);
            }
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, &app))?;
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_event(&mut app, event),
                    Some(Err(e)) => {
                        return Err(DeskError::Terminal(format!("reading input: {e}")).into());
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!(events = app.event_log.len(), "TUI stopped");
    Ok(app.session)
}

/// Feed one terminal event into the app. Only key presses count; repeats
/// and releases (reported on some platforms) are dropped.
fn handle_event(app: &mut TuiApp, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            debug!(?key, "key");
            app.update(TuiMessage::Input(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn every_press_reaches_the_input() {
        let mut app = TuiApp::new();
        for c in "Math".chars() {
            handle_event(&mut app, key(KeyCode::Char(c), KeyEventKind::Press));
        }
        handle_event(&mut app, key(KeyCode::Enter, KeyEventKind::Press));
        assert_eq!(app.session.course_types().as_slice(), &["Math"]);
    }

    #[test]
    fn releases_and_non_key_events_are_ignored() {
        let mut app = TuiApp::new();
        handle_event(&mut app, key(KeyCode::Char('x'), KeyEventKind::Release));
        handle_event(&mut app, Event::Resize(80, 24));
        handle_event(&mut app, key(KeyCode::Enter, KeyEventKind::Press));
        assert!(app.session.course_types().is_empty());
    }
}
