//! Crossterm-backed [`Frontend`].

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use super::{Frontend, Keystroke, View, ui};

/// Restores the terminal on drop, including on early error returns.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Full-screen terminal frontend.
///
/// Raw mode and the alternate screen are held for the lifetime of the value.
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    word_list: String,
    _guard: TerminalGuard,
}

impl TerminalFrontend {
    /// Takes over the terminal.
    ///
    /// `word_list` is only used for the header hint.
    #[instrument(skip(word_list), fields(word_list = %word_list.as_ref().display()))]
    pub fn new(word_list: impl AsRef<Path>) -> Result<Self> {
        enable_raw_mode().context("This game needs an interactive terminal")?;
        let guard = TerminalGuard;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        info!("Terminal ready");
        Ok(Self {
            terminal,
            word_list: word_list.as_ref().display().to_string(),
            _guard: guard,
        })
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, view: &View) -> Result<()> {
        let word_list = &self.word_list;
        self.terminal.draw(|f| ui::draw(f, view, word_list))?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Keystroke> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release on some platforms).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let keystroke = map_key(key);
                debug!(?keystroke, "Key read");
                return Ok(keystroke);
            }
        }
    }
}

/// Maps a crossterm key event to a [`Keystroke`].
pub fn map_key(key: KeyEvent) -> Keystroke {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Keystroke::Interrupt
        }
        KeyCode::Char(c) => Keystroke::Char(c),
        KeyCode::Enter => Keystroke::Enter,
        _ => Keystroke::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Keystroke::Interrupt);
    }

    #[test]
    fn test_plain_c_is_char() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Keystroke::Char('c'));
    }

    #[test]
    fn test_enter_and_arrows() {
        assert_eq!(map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), Keystroke::Enter);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)), Keystroke::Other);
    }
}
