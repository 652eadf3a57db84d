//! Crossterm terminal driver.
//!
//! [`Terminal`] owns raw mode and the alternate screen, turns pending
//! events into [`Action`]s and writes diffed frames.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::debug;

use crate::input::{Action, to_action};
use crate::palette::Color;
use crate::screen::{FrameCell, Screen, compute_frame};

/// Maps a palette [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

pub struct Terminal {
    out: Stdout,
    mouse_enabled: bool,
    active: bool,
    last: Option<Screen>,
}

impl Terminal {
    pub fn new(mouse_enabled: bool) -> Self {
        Self {
            out: io::stdout(),
            mouse_enabled,
            active: false,
            last: None,
        }
    }

    /// Current terminal size in columns and rows.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(self.out, EnableMouseCapture)?;
        }
        debug!("terminal: initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Action>> {
        let mut actions = Vec::new();
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            while event::poll(Duration::ZERO)? {
                if let Some(a) = to_action(&event::read()?) {
                    actions.push(a);
                }
            }
            if !actions.is_empty() || remaining.is_zero() {
                break;
            }
        }
        Ok(actions)
    }

    /// Forget the last frame so the next [`present`](Self::present) repaints
    /// everything.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.last = None;
        execute!(self.out, ResetColor, terminal::Clear(ClearType::All))
    }

    /// Write the glyphs of `screen` that changed since the last call.
    pub fn present(&mut self, screen: Screen) -> io::Result<()> {
        let frame = compute_frame(self.last.as_ref(), &screen);
        self.flush(&frame)?;
        self.last = Some(screen);
        Ok(())
    }

    fn flush(&mut self, frame: &[FrameCell]) -> io::Result<()> {
        if frame.is_empty() {
            return Ok(());
        }
        let mut colors = None;
        for fc in frame {
            queue!(self.out, cursor::MoveTo(fc.x, fc.y))?;
            let pair = (fc.glyph.fg, fc.glyph.bg);
            if colors != Some(pair) {
                queue!(
                    self.out,
                    SetForegroundColor(to_ct_color(pair.0)),
                    SetBackgroundColor(to_ct_color(pair.1))
                )?;
                colors = Some(pair);
            }
            queue!(self.out, Print(fc.glyph.ch))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if self.mouse_enabled {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        debug!("terminal: restored");
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
