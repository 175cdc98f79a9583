//! Maps field coordinates (origin at center, y up) onto terminal cells

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field: Vec2,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field: Vec2) -> Self {
        Self { cols, rows, field }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn half(&self) -> Vec2 {
        self.field * 0.5
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        let half = self.half();
        pos.x.abs() <= half.x && pos.y.abs() <= half.y
    }

    pub fn column(&self, x: f32) -> u16 {
        let half = self.half().x;
        let t = ((x + half) / self.field.x).clamp(0.0, 1.0);
        (t * self.cols.saturating_sub(1) as f32).round() as u16
    }

    pub fn row(&self, y: f32) -> u16 {
        let half = self.half().y;
        let t = ((half - y) / self.field.y).clamp(0.0, 1.0);
        (t * self.rows.saturating_sub(1) as f32).round() as u16
    }

    /// Cell for a point, `None` when it lies outside the field
    pub fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        if !self.contains(pos) {
            return None;
        }
        Some((self.column(pos.x), self.row(pos.y)))
    }

    /// Rows covered by a vertical span centered on `y`, clipped to the
    /// field. `None` when the span is entirely off screen.
    pub fn span(&self, y: f32, height: f32) -> Option<(u16, u16)> {
        let half = self.half().y;
        let top = y + height * 0.5;
        let bottom = y - height * 0.5;
        if bottom > half || top < -half {
            return None;
        }
        Some((self.row(top), self.row(bottom)))
    }
}
