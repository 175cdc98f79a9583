use glam::Vec2;

use crate::render::{Align, DisplayError, Font, Renderer, TextHandle};
use crate::Side;

/// One player's point counter and the text that shows it
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub side: Side,
    pub anchor: Vec2,
    count: u32,
    handle: Option<TextHandle>,
    last_rendered: Option<u32>,
}

impl Scoreboard {
    pub fn new(side: Side, anchor: Vec2) -> Self {
        Self {
            side,
            anchor,
            count: 0,
            handle: None,
            last_rendered: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Whether the displayed value lags behind the count
    pub fn is_stale(&self) -> bool {
        self.last_rendered != Some(self.count)
    }

    /// Clear the old number and draw the current one
    pub fn reset_display(&mut self, renderer: &mut dyn Renderer) -> Result<(), DisplayError> {
        if !self.is_stale() {
            return Ok(());
        }

        if let Some(handle) = self.handle.take() {
            renderer.clear_text(handle)?;
        }
        let handle = renderer.draw_text(
            self.anchor,
            &self.count.to_string(),
            Font::SCORE,
            Align::Left,
        )?;
        self.handle = Some(handle);
        self.last_rendered = Some(self.count);
        Ok(())
    }

    /// Replace the number with a centered banner
    pub fn announce(&mut self, renderer: &mut dyn Renderer, text: &str) -> Result<(), DisplayError> {
        if let Some(handle) = self.handle.take() {
            renderer.clear_text(handle)?;
        }
        self.anchor = Vec2::ZERO;
        self.handle = Some(renderer.draw_text(self.anchor, text, Font::BANNER, Align::Center)?);
        Ok(())
    }

    /// Drop the text handle after the whole display was wiped
    pub fn forget_display(&mut self) {
        self.handle = None;
        self.last_rendered = None;
    }
}

/// Victory banner for a side
pub fn victory_banner(side: Side) -> String {
    format!("*******Player_{} WIN*******", side.player_number())
}
