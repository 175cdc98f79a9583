use glam::Vec2;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 2, w/s keys
    Right, // Player 1, arrow keys
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    /// Player number shown to humans
    pub fn player_number(self) -> u8 {
        match self {
            Side::Right => 1,
            Side::Left => 2,
        }
    }
}

/// Paddle component - a player's paddle. Only `pos.y` ever changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, x: f32) -> Self {
        Self {
            side,
            pos: Vec2::new(x, 0.0),
        }
    }

    /// Move up by `step`. Not clamped: paddles may leave the field.
    pub fn move_up(&mut self, step: f32) {
        self.pos.y += step;
    }

    /// Move down by `step`. Not clamped either.
    pub fn move_down(&mut self, step: f32) {
        self.pos.y -= step;
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the center moving up and to the right at `speed` per axis
    pub fn kickoff(speed: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::splat(speed))
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball back on the center spot and send it the other way
    pub fn serve(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel.x = -self.vel.x;
    }
}
