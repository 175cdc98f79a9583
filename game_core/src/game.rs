use glam::Vec2;
use hecs::{Entity, World};
use tracing::trace;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, Frame, InputQueue, Paddle,
    PaddleCommand, Phase, Score, Side, TickDelay,
};

/// Everything one match owns. Passed explicitly to each tick.
///
/// The world is private: the ball and both paddles are spawned in `new` and
/// the tick systems only mutate them, so their entities stay alive for the
/// whole match.
pub struct GameState {
    world: World,
    pub config: Config,
    pub score: Score,
    pub tick_delay: TickDelay,
    pub phase: Phase,
    pub events: Events,
    pub input_queue: InputQueue,
    pub tick: u32,
    ball: Entity,
    left_paddle: Entity,
    right_paddle: Entity,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        // Paddles on their lines, ball on the center spot
        let left_paddle = create_paddle(&mut world, Side::Left, &config);
        let right_paddle = create_paddle(&mut world, Side::Right, &config);
        let kickoff = Ball::kickoff(config.ball_speed);
        let ball = create_ball(&mut world, kickoff.pos, kickoff.vel);

        Self {
            world,
            score: Score::new(&config),
            tick_delay: TickDelay::new(config.initial_tick_delay),
            phase: Phase::Running,
            events: Events::new(),
            input_queue: InputQueue::new(),
            tick: 0,
            config,
            ball,
            left_paddle,
            right_paddle,
        }
    }

    /// Advance one tick. Does nothing once the match is finished.
    pub fn tick(&mut self) {
        if self.phase == Phase::Running {
            self.tick += 1;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.tick_delay,
            &mut self.phase,
            &mut self.events,
            &mut self.input_queue,
        );

        trace!(tick = self.tick, ball = ?self.ball().pos, "tick");
    }

    pub fn push_input(&mut self, command: PaddleCommand) {
        self.input_queue.push(command);
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Current ball. The entity is never despawned, so the kickoff fallback
    /// is unreachable.
    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::kickoff(self.config.ball_speed))
    }

    /// Current paddle for a side. Like `ball`, the lookup always succeeds.
    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.config.paddle_x(side)))
    }

    /// Overwrite ball position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame {
            ball: self.ball().pos,
            left_paddle: self.paddle(Side::Left).pos,
            right_paddle: self.paddle(Side::Right).pos,
            paddle_height: self.config.paddle_height,
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            phase: self.phase,
        }
    }

    /// The side whose banner ends up on screen, if the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.phase != Phase::Finished {
            return None;
        }
        // Later checks overwrite earlier banners
        Side::BOTH
            .into_iter()
            .filter(|side| self.score.has_won(*side, self.config.win_score))
            .last()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaddleMove;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.ball().pos, Vec2::ZERO);
        assert_eq!(state.ball().vel, Vec2::new(10.0, 10.0));
        assert_eq!(state.paddle(Side::Left).pos, Vec2::new(-470.0, 0.0));
        assert_eq!(state.paddle(Side::Right).pos, Vec2::new(470.0, 0.0));
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.tick_delay.seconds, 0.1);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_inputs_apply_before_physics() {
        let mut state = GameState::default();
        state.push_input(PaddleCommand::new(Side::Left, PaddleMove::Up));

        state.tick();

        assert_eq!(state.paddle(Side::Left).pos.y, 40.0);
        assert_eq!(state.ball().pos, Vec2::new(10.0, 10.0));
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_frame_reflects_state() {
        let mut state = GameState::default();
        state.place_ball(Vec2::new(30.0, -20.0), Vec2::new(-10.0, 10.0));

        let frame = state.frame();

        assert_eq!(frame.ball, Vec2::new(30.0, -20.0));
        assert_eq!(frame.right_paddle, Vec2::new(470.0, 0.0));
        assert_eq!(frame.paddle_height, 100.0);
        assert_eq!(frame.phase, Phase::Running);
    }

    #[test]
    fn test_entities_survive_a_full_match() {
        let config = Config {
            win_score: 1,
            ..Config::default()
        };
        let mut state = GameState::new(config);
        state.place_ball(Vec2::new(505.0, 300.0), Vec2::new(10.0, 10.0));
        state.push_input(PaddleCommand::new(Side::Right, PaddleMove::Down));

        state.tick();
        state.tick();

        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.world.len(), 3, "Ball and both paddles, nothing else");
        assert!(state.world.contains(state.ball));
        assert!(state.world.contains(state.left_paddle));
        assert!(state.world.contains(state.right_paddle));

        // Accessors read the live components, not a fallback
        let stored = *state.world.get::<&Ball>(state.ball).unwrap();
        assert_eq!(state.ball(), stored);
        assert_eq!(stored.pos, Vec2::ZERO, "Served from the center");
        assert_eq!(stored.vel, Vec2::new(-10.0, 10.0));
        assert_eq!(state.paddle(Side::Right).pos.y, -40.0);
    }

    #[test]
    fn test_finished_state_ignores_ticks() {
        let mut state = GameState::default();
        state.phase = Phase::Finished;
        state.push_input(PaddleCommand::new(Side::Right, PaddleMove::Up));

        state.tick();

        assert_eq!(state.ball().pos, Vec2::ZERO, "Ball does not move");
        assert_eq!(state.paddle(Side::Right).pos.y, 0.0, "Paddles do not move");
        assert_eq!(state.tick, 0);
    }
}
