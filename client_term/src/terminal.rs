//! Terminal implementation of the game's renderer

use std::cell::Cell;
use std::collections::BTreeMap;
use std::io::Write;
use std::rc::Rc;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use game_core::{Align, Color, DisplayError, Font, FontStyle, Frame, Phase, Renderer, TextHandle};
use glam::Vec2;

use crate::viewport::Viewport;

const BALL_GLYPH: &str = "O";
const PADDLE_GLYPH: &str = "█";

#[derive(Debug, Clone)]
struct TextItem {
    pos: Vec2,
    text: String,
    font: Font,
    align: Align,
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Blue => style::Color::DarkBlue,
    }
}

/// Draws frames and text with crossterm into any writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Rc<Cell<Viewport>>,
    background: Color,
    texts: BTreeMap<u32, TextItem>,
    next_handle: u32,
    sprites_hidden: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Rc<Cell<Viewport>>) -> Self {
        Self {
            out,
            viewport,
            background: Color::Black,
            texts: BTreeMap::new(),
            next_handle: 0,
            sprites_hidden: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn draw_paddle(&mut self, viewport: &Viewport, pos: Vec2, height: f32) -> std::io::Result<()> {
        let Some((top, bottom)) = viewport.span(pos.y, height) else {
            return Ok(());
        };
        let col = viewport.column(pos.x);
        for row in top..=bottom {
            queue!(self.out, MoveTo(col, row), Print(PADDLE_GLYPH))?;
        }
        Ok(())
    }

    fn draw_texts(&mut self, viewport: &Viewport) -> std::io::Result<()> {
        for item in self.texts.values() {
            let Some((col, row)) = viewport.cell(item.pos) else {
                continue;
            };
            let col = match item.align {
                Align::Left => col,
                Align::Center => col.saturating_sub(item.text.chars().count() as u16 / 2),
            };
            queue!(self.out, MoveTo(col, row), SetAttribute(Attribute::Bold))?;
            if item.font.style == FontStyle::Italic {
                queue!(self.out, SetAttribute(Attribute::Italic))?;
            }
            queue!(
                self.out,
                Print(&item.text),
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(term_color(self.background)),
                SetForegroundColor(style::Color::White)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_frame(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let mut viewport = self.viewport.get();
        viewport.field = Vec2::new(frame.field_width, frame.field_height);
        self.viewport.set(viewport);

        queue!(
            self.out,
            SetBackgroundColor(term_color(self.background)),
            SetForegroundColor(style::Color::White),
            Clear(ClearType::All)
        )?;

        if !self.sprites_hidden && frame.phase == Phase::Running {
            self.draw_paddle(&viewport, frame.left_paddle, frame.paddle_height)?;
            self.draw_paddle(&viewport, frame.right_paddle, frame.paddle_height)?;
            if let Some((col, row)) = viewport.cell(frame.ball) {
                queue!(self.out, MoveTo(col, row), Print(BALL_GLYPH))?;
            }
        }

        self.draw_texts(&viewport)?;
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        pos: Vec2,
        text: &str,
        font: Font,
        align: Align,
    ) -> Result<TextHandle, DisplayError> {
        self.next_handle += 1;
        self.texts.insert(
            self.next_handle,
            TextItem {
                pos,
                text: text.to_string(),
                font,
                align,
            },
        );
        Ok(TextHandle(self.next_handle))
    }

    fn clear_text(&mut self, handle: TextHandle) -> Result<(), DisplayError> {
        self.texts.remove(&handle.0);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.texts.clear();
        self.sprites_hidden = true;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> Result<(), DisplayError> {
        self.background = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        let viewport = Viewport::new(101, 71, Vec2::new(1000.0, 700.0));
        TerminalRenderer::new(Vec::new(), Rc::new(Cell::new(viewport)))
    }

    fn frame(phase: Phase) -> Frame {
        Frame {
            ball: Vec2::ZERO,
            left_paddle: Vec2::new(-470.0, 0.0),
            right_paddle: Vec2::new(470.0, 0.0),
            paddle_height: 100.0,
            field_width: 1000.0,
            field_height: 700.0,
            phase,
        }
    }

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.writer()).into_owned()
    }

    #[test]
    fn test_frame_draws_ball_and_paddles() {
        let mut r = renderer();
        r.render_frame(&frame(Phase::Running)).unwrap();

        let out = output(&r);
        assert!(out.contains(BALL_GLYPH));
        // Two paddles of 11 rows each
        assert_eq!(out.matches(PADDLE_GLYPH).count(), 22);
    }

    #[test]
    fn test_text_survives_until_cleared() {
        let mut r = renderer();
        let handle = r
            .draw_text(Vec2::new(100.0, 250.0), "READY", Font::SCORE, Align::Left)
            .unwrap();
        r.render_frame(&frame(Phase::Running)).unwrap();
        assert!(output(&r).contains("READY"));

        r.clear_text(handle).unwrap();
        r.out.clear();
        r.render_frame(&frame(Phase::Running)).unwrap();
        assert!(!output(&r).contains("READY"));
    }

    #[test]
    fn test_clear_hides_sprites_and_text() {
        let mut r = renderer();
        r.draw_text(Vec2::ZERO, "3", Font::SCORE, Align::Left).unwrap();
        r.clear().unwrap();
        r.draw_text(Vec2::ZERO, "*******Player_2 WIN*******", Font::BANNER, Align::Center)
            .unwrap();

        r.render_frame(&frame(Phase::Running)).unwrap();

        let out = output(&r);
        assert!(out.contains("*******Player_2 WIN*******"));
        assert!(!out.contains(PADDLE_GLYPH));
        assert!(!out.contains(BALL_GLYPH));
    }

    #[test]
    fn test_finished_frame_has_no_sprites() {
        let mut r = renderer();
        r.render_frame(&frame(Phase::Finished)).unwrap();
        assert!(!output(&r).contains(PADDLE_GLYPH));
    }

    #[test]
    fn test_render_frame_tracks_field_size() {
        let mut r = renderer();
        let mut f = frame(Phase::Running);
        f.field_width = 2000.0;
        r.render_frame(&f).unwrap();
        assert_eq!(r.viewport.get().field, Vec2::new(2000.0, 700.0));
    }
}
