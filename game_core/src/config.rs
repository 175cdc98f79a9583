use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub wall_y: f32,
    pub score_x: f32,
    pub paddle_x: f32,
    pub paddle_reach_x: f32,
    pub paddle_step: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub hit_radius: f32,
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub win_score: u32,
    pub initial_tick_delay: f32,
    pub tick_delay_factor: f32,
    pub min_tick_delay: f32,
    pub scoreboard_x: f32,
    pub scoreboard_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            wall_y: Params::WALL_Y,
            score_x: Params::SCORE_X,
            paddle_x: Params::PADDLE_X,
            paddle_reach_x: Params::PADDLE_REACH_X,
            paddle_step: Params::PADDLE_STEP,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            hit_radius: Params::HIT_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_radius: Params::BALL_RADIUS,
            win_score: Params::WIN_SCORE,
            initial_tick_delay: Params::INITIAL_TICK_DELAY,
            tick_delay_factor: Params::TICK_DELAY_FACTOR,
            min_tick_delay: Params::MIN_TICK_DELAY,
            scoreboard_x: Params::SCOREBOARD_X,
            scoreboard_y: Params::SCOREBOARD_Y,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fixed X position of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }

    /// Where a side's scoreboard text is anchored
    pub fn scoreboard_anchor(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(-self.scoreboard_x, self.scoreboard_y),
            Side::Right => Vec2::new(self.scoreboard_x, self.scoreboard_y),
        }
    }

    /// Tick delay after a point has been scored. Never longer than `current`.
    pub fn next_tick_delay(&self, current: f32) -> f32 {
        (current * self.tick_delay_factor)
            .max(self.min_tick_delay)
            .min(current)
    }
}
