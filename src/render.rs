use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use universe::Universe;

pub trait Renderer {
    fn render(&mut self, universe: &Universe, generation: usize) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub alive_color: Color,
    pub dead_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alive_color: Color::Green,
            dead_color: Color::DarkGrey,
        }
    }
}

/// Redraws the whole grid in place on every frame.
pub struct TerminalRenderer<W: Write> {
    out: W,
    settings: Settings,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, settings: Settings) -> Self {
        Self { out, settings }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, universe: &Universe, generation: usize) -> io::Result<()> {
        let Settings {
            alive_color,
            dead_color,
        } = self.settings;
        // Moving home instead of clearing avoids flicker between frames.
        queue!(self.out, Hide, MoveTo(0, 0))?;
        queue!(
            self.out,
            Print(format!(
                "Generation: {generation} | Population: {}\n\n",
                universe.population()
            ))
        )?;
        let size = universe.grid_size() as isize;
        for y in 0..size {
            for x in 0..size {
                let (color, glyph) = if universe.is_alive((x, y)) {
                    (alive_color, " #")
                } else {
                    (dead_color, " ·")
                };
                queue!(self.out, SetForegroundColor(color), Print(glyph))?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }
        queue!(self.out, Show)?;
        self.out.flush()
    }
}
