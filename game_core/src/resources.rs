use std::time::Duration;

use crate::{Config, Scoreboard, Side};

/// Game score tracking, one scoreboard per side
#[derive(Debug, Clone)]
pub struct Score {
    pub left: Scoreboard,
    pub right: Scoreboard,
}

impl Score {
    pub fn new(config: &Config) -> Self {
        Self {
            left: Scoreboard::new(Side::Left, config.scoreboard_anchor(Side::Left)),
            right: Scoreboard::new(Side::Right, config.scoreboard_anchor(Side::Right)),
        }
    }

    pub fn board(&self, side: Side) -> &Scoreboard {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Scoreboard {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        self.board(side).count()
    }

    pub fn increment(&mut self, side: Side) {
        self.board_mut(side).increment();
    }

    pub fn increment_left(&mut self) {
        self.increment(Side::Left);
    }

    pub fn increment_right(&mut self) {
        self.increment(Side::Right);
    }

    /// Whether `side` sits exactly on the winning score
    pub fn has_won(&self, side: Side, win_score: u32) -> bool {
        self.get(side) == win_score
    }
}

/// Delay between ticks. Shrinks on every point so the game speeds up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDelay {
    pub seconds: f32,
}

impl TickDelay {
    pub fn new(seconds: f32) -> Self {
        Self { seconds }
    }

    pub fn speed_up(&mut self, config: &Config) {
        self.seconds = config.next_tick_delay(self.seconds);
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f32(self.seconds.max(0.0))
    }
}

/// Match lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Finished,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    /// Sides that reached the win score this tick, in check order
    pub winners: Vec<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.left_scored = false;
        self.right_scored = false;
        self.winners.clear();
    }

    pub fn scored(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_scored,
            Side::Right => self.right_scored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// A request to move one paddle one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub side: Side,
    pub dir: PaddleMove,
}

impl PaddleCommand {
    pub fn new(side: Side, dir: PaddleMove) -> Self {
        Self { side, dir }
    }
}

/// Paddle commands waiting for the next tick, oldest first
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<PaddleCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PaddleCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> Vec<PaddleCommand> {
        std::mem::take(&mut self.commands)
    }
}
