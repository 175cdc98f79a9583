//! Boundary between the game and whatever draws it and reads the keyboard

use std::time::Duration;

use glam::Vec2;
use thiserror::Error;

use crate::Phase;

/// Failure reported by the display collaborator. Always fatal to the loop.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The window (or terminal) was closed from outside the game
    #[error("display was closed")]
    Closed,
    /// Drawing or reading input failed
    #[error("display I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Background colours used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Font descriptor passed through to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub family: &'static str,
    pub size: u16,
    pub style: FontStyle,
}

impl Font {
    pub const SCORE: Font = Font {
        family: "bold",
        size: 50,
        style: FontStyle::Normal,
    };

    pub const BANNER: Font = Font {
        family: "bold",
        size: 50,
        style: FontStyle::Italic,
    };
}

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Handle to a piece of text currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(pub u32);

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub ball: Vec2,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub paddle_height: f32,
    pub field_width: f32,
    pub field_height: f32,
    pub phase: Phase,
}

/// Drawing side of the display collaborator
pub trait Renderer {
    /// Flush ball and paddle positions to the display
    fn render_frame(&mut self, frame: &Frame) -> Result<(), DisplayError>;

    fn draw_text(
        &mut self,
        pos: Vec2,
        text: &str,
        font: Font,
        align: Align,
    ) -> Result<TextHandle, DisplayError>;

    /// Remove previously drawn text. Unknown handles are ignored.
    fn clear_text(&mut self, handle: TextHandle) -> Result<(), DisplayError>;

    /// Wipe every sprite and text from the display
    fn clear(&mut self) -> Result<(), DisplayError>;

    fn set_background(&mut self, color: Color) -> Result<(), DisplayError>;
}

/// Timing and input side of the display collaborator
pub trait EventSource {
    /// Block for `delay` and return the names of keys pressed meanwhile,
    /// oldest first
    fn wait(&mut self, delay: Duration) -> Result<Vec<String>, DisplayError>;

    /// Block until the player dismisses the final screen
    fn await_dismissal(&mut self) -> Result<(), DisplayError>;
}
