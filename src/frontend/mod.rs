//! Rendering and input, behind a trait so the controller runs without a terminal.

mod terminal;
mod ui;
mod view;

pub use terminal::{TerminalFrontend, map_key};
pub use view::{BoardView, Prompt, View};

use anyhow::Result;

/// A key press as the game sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// A printable character.
    Char(char),
    /// Enter / return, an empty answer.
    Enter,
    /// Ctrl+C.
    Interrupt,
    /// Anything else (arrows, function keys, ...).
    Other,
}

/// Display surface plus blocking keyboard.
pub trait Frontend {
    /// Draws the view, replacing whatever was shown before.
    fn render(&mut self, view: &View) -> Result<()>;

    /// Blocks until the next key press.
    fn read_key(&mut self) -> Result<Keystroke>;
}
