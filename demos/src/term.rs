//! Terminal session and key bindings shared by the demo binaries.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

// ---------------------------------------------------------------------------
// Key bindings
// ---------------------------------------------------------------------------

/// What a key press asks the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    TogglePause,
    SpeedMore,
    SpeedLess,
    /// Switch to the next algorithm and replay.
    NextAlgorithm,
    /// Stop the current playback and start over with fresh input.
    Restart,
    /// Pathfinding only: recursive-division maze.
    Maze,
    /// Pathfinding only: random walls.
    RandomWalls,
    /// Pathfinding only: remove all walls.
    ClearWalls,
}

/// Key bindings for the demos.
#[derive(Debug, Clone)]
pub struct Keys {
    pub quit: Vec<KeyCode>,
    pub pause: Vec<KeyCode>,
    pub speed_more: Vec<KeyCode>,
    pub speed_less: Vec<KeyCode>,
    pub next_algorithm: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
    pub maze: Vec<KeyCode>,
    pub random_walls: Vec<KeyCode>,
    pub clear_walls: Vec<KeyCode>,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            quit: vec![KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')],
            pause: vec![KeyCode::Char(' '), KeyCode::Char('p'), KeyCode::Char('P')],
            speed_more: vec![KeyCode::Char('+'), KeyCode::Char('='), KeyCode::Up],
            speed_less: vec![KeyCode::Char('-'), KeyCode::Down],
            next_algorithm: vec![KeyCode::Tab, KeyCode::Right],
            restart: vec![KeyCode::Char('r'), KeyCode::Enter],
            maze: vec![KeyCode::Char('m')],
            random_walls: vec![KeyCode::Char('w')],
            clear_walls: vec![KeyCode::Char('c')],
        }
    }
}

impl Keys {
    /// Map a key to its action.
    pub fn action(&self, code: KeyCode) -> Action {
        let bindings = [
            (&self.quit, Action::Quit),
            (&self.pause, Action::TogglePause),
            (&self.speed_more, Action::SpeedMore),
            (&self.speed_less, Action::SpeedLess),
            (&self.next_algorithm, Action::NextAlgorithm),
            (&self.restart, Action::Restart),
            (&self.maze, Action::Maze),
            (&self.random_walls, Action::RandomWalls),
            (&self.clear_walls, Action::ClearWalls),
        ];
        bindings
            .into_iter()
            .find(|(keys, _)| keys.contains(&code))
            .map_or(Action::None, |(_, a)| a)
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Raw-mode alternate-screen session, restored on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Terminal size as `(cols, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyCode>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(Some(code)),
            _ => Ok(None),
        }
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))
    }

    /// Queue `text` at `(col, row)` in `color`.
    pub fn put(&mut self, col: u16, row: u16, color: Color, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let k = Keys::default();
        assert_eq!(k.action(KeyCode::Char('q')), Action::Quit);
        assert_eq!(k.action(KeyCode::Char(' ')), Action::TogglePause);
        assert_eq!(k.action(KeyCode::Tab), Action::NextAlgorithm);
        assert_eq!(k.action(KeyCode::Char('m')), Action::Maze);
        assert_eq!(k.action(KeyCode::Char('z')), Action::None);
    }
}
