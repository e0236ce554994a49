use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

/// Text attributes for a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Look {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Look {
    pub const PLAIN: Self = Self {
        bold: false,
        dim: false,
        reverse: false,
    };

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::PLAIN
        }
    }

    pub fn dim() -> Self {
        Self {
            dim: true,
            ..Self::PLAIN
        }
    }

    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Self::PLAIN
        }
    }
}

/// A run of text at a position.
#[derive(Debug, Clone)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub look: Look,
}

impl Span {
    pub fn new(x: u16, y: u16, text: impl Into<String>, look: Look) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            look,
        }
    }
}

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen. Later spans paint over earlier ones.
    pub fn draw(&mut self, spans: &[Span], cursor_at: Option<(u16, u16)>) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for span in spans {
            queue!(self.stdout, cursor::MoveTo(span.x, span.y))?;
            if span.look.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.look.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if span.look.reverse {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.stdout,
                Print(&span.text),
                SetAttribute(Attribute::Reset)
            )?;
        }

        match cursor_at {
            Some((x, y)) => queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => queue!(self.stdout, cursor::Hide)?,
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
