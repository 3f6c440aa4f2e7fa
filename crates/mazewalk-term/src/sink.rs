//! The animating [`Sink`].

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazewalk_core::{Context, Maze, Point};
use mazewalk_paths::Sink;

use crate::config::TermConfig;
use crate::glyph::{Glyph, Mark, glyph, legend};

/// Whether a key press asks to stop the animation.
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draws a maze and animates search events on it.
///
/// Each event redraws one cell, then pauses for the configured delay. In
/// interactive mode (after [`init`](Self::init)) the pause also polls the
/// keyboard, and `q`, `Esc` or `Ctrl-C` cancel the shared [`Context`].
///
/// [`Sink`] methods cannot fail, so the first I/O error is kept, the
/// context is cancelled, and the error is handed out by
/// [`take_error`](Self::take_error).
pub struct TerminalSink<'a, W: Write> {
    maze: &'a Maze,
    marks: Vec<Mark>,
    config: TermConfig,
    ctx: Context,
    out: W,
    interactive: bool,
    error: Option<io::Error>,
}

impl<'a> TerminalSink<'a, io::Stdout> {
    /// A sink drawing to standard output.
    pub fn stdout(maze: &'a Maze, config: TermConfig, ctx: Context) -> Self {
        Self::new(maze, config, ctx, io::stdout())
    }
}

impl<'a, W: Write> TerminalSink<'a, W> {
    /// A sink drawing to `out`.
    pub fn new(maze: &'a Maze, config: TermConfig, ctx: Context, out: W) -> Self {
        Self {
            maze,
            marks: vec![Mark::None; maze.bounds().len()],
            config,
            ctx,
            out,
            interactive: false,
            error: None,
        }
    }

    /// Enter raw mode and the alternate screen, then draw the maze.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.interactive = true;
        self.draw()
    }

    /// Restore the terminal. Safe to call without a prior `init`.
    pub fn close(&mut self) {
        if !self.interactive {
            return;
        }
        self.interactive = false;
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    /// The current mark of a cell.
    pub fn mark(&self, p: Point) -> Mark {
        self.maze
            .bounds()
            .index(p)
            .map_or(Mark::None, |i| self.marks[i])
    }

    /// The first I/O error met while drawing, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Draw the whole maze, and the legend if configured.
    pub fn draw(&mut self) -> io::Result<()> {
        for (p, _) in self.maze.iter() {
            self.queue_cell(p)?;
        }
        if self.config.legend {
            let y = self.legend_row();
            queue!(self.out, cursor::MoveTo(0, y))?;
            for (g, label) in legend() {
                self.queue_glyph(g)?;
                queue!(self.out, ResetColor, Print(format!(" {label}  ")))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Write a line of text under the maze (and legend).
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        let y = self.legend_row() + u16::from(self.config.legend) + 1;
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            terminal::Clear(ClearType::CurrentLine),
            ResetColor,
            Print(text)
        )?;
        self.out.flush()
    }

    /// Block until a key is pressed, or return at once when not
    /// interactive.
    pub fn wait_key(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    fn legend_row(&self) -> u16 {
        self.maze.rows() as u16 + 1
    }

    fn queue_glyph(&mut self, g: Glyph) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(g.fg),
            SetBackgroundColor(g.bg),
            Print(g.ch),
            Print(' ')
        )
    }

    fn queue_cell(&mut self, p: Point) -> io::Result<()> {
        let Some(tile) = self.maze.tile(p) else {
            return Ok(());
        };
        let g = glyph(tile, self.mark(p));
        queue!(self.out, cursor::MoveTo(p.col as u16 * 2, p.row as u16))?;
        self.queue_glyph(g)
    }

    fn update(&mut self, p: Point, mark: Mark, delay: Duration) {
        if self.error.is_some() {
            return;
        }
        if let Some(i) = self.maze.bounds().index(p) {
            self.marks[i] = self.marks[i].merge(mark);
        }
        if let Err(err) = self.redraw(p, delay) {
            log::error!("terminal output failed: {err}");
            self.error = Some(err);
            self.ctx.cancel();
        }
    }

    fn redraw(&mut self, p: Point, delay: Duration) -> io::Result<()> {
        self.queue_cell(p)?;
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        self.pause(delay)
    }

    /// Sleep for `delay`, watching for quit keys when interactive.
    fn pause(&mut self, delay: Duration) -> io::Result<()> {
        if self.ctx.is_done() {
            return Ok(());
        }
        if !self.interactive {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            return Ok(());
        }
        let deadline = Instant::now() + delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(&key) {
                    log::info!("animation cancelled by user");
                    self.ctx.cancel();
                    return Ok(());
                }
            }
            if left.is_zero() {
                return Ok(());
            }
        }
    }
}

impl<W: Write> Sink for TerminalSink<'_, W> {
    fn on_visited(&mut self, p: Point) {
        self.update(p, Mark::Visited, self.config.step_delay);
    }

    fn on_enqueued(&mut self, p: Point) {
        self.update(p, Mark::Enqueued, self.config.step_delay);
    }

    fn on_path_step(&mut self, p: Point, _best: bool, reverse: bool) {
        self.update(p, Mark::path(reverse), self.config.path_delay);
    }
}

impl<W: Write> Drop for TerminalSink<'_, W> {
    fn drop(&mut self) {
        self.close();
    }
}
