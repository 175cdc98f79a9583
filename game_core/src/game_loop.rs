//! Drives a [`GameState`] against a display: render, wait, tick, present.

use tracing::{debug, info};

use crate::{
    victory_banner, Color, DisplayError, EventSource, GameState, KeyBindings, Renderer, Side,
};

/// Background shown behind a side's victory banner
pub fn victory_color(side: Side) -> Color {
    match side {
        Side::Right => Color::Red,
        Side::Left => Color::Blue,
    }
}

/// Runs one match from kickoff to dismissal
pub struct GameLoop<R: Renderer, E: EventSource> {
    pub state: GameState,
    pub bindings: KeyBindings,
    renderer: R,
    events: E,
}

impl<R: Renderer, E: EventSource> GameLoop<R, E> {
    pub fn new(state: GameState, bindings: KeyBindings, renderer: R, events: E) -> Self {
        Self {
            state,
            bindings,
            renderer,
            events,
        }
    }

    /// Paint the background and both starting scores
    pub fn setup(&mut self) -> Result<(), DisplayError> {
        self.renderer.set_background(Color::Black)?;
        for side in Side::BOTH {
            self.state
                .score
                .board_mut(side)
                .reset_display(&mut self.renderer)?;
        }
        Ok(())
    }

    /// Play until somebody wins, show the result and wait for dismissal.
    /// Returns the side whose banner is on screen.
    pub fn run(&mut self) -> Result<Option<Side>, DisplayError> {
        info!(
            win_score = self.state.config.win_score,
            tick_delay = self.state.tick_delay.seconds,
            "match started"
        );
        self.setup()?;

        while self.state.is_running() {
            self.run_tick()?;
        }

        // One last frame with the banner, then hand over to the player
        self.renderer.render_frame(&self.state.frame())?;
        self.events.await_dismissal()?;

        let winner = self.state.winner();
        info!(ticks = self.state.tick, winner = ?winner, "match over");
        Ok(winner)
    }

    /// Render, throttle, collect keys, advance and present one tick
    pub fn run_tick(&mut self) -> Result<(), DisplayError> {
        self.renderer.render_frame(&self.state.frame())?;

        let keys = self.events.wait(self.state.tick_delay.as_duration())?;
        for key in keys {
            match self.bindings.resolve(&key) {
                Some(command) => self.state.push_input(command),
                None => debug!(key = %key, "ignoring unbound key"),
            }
        }

        self.state.tick();
        self.present()
    }

    /// Push this tick's score and victory changes to the display
    fn present(&mut self) -> Result<(), DisplayError> {
        for side in Side::BOTH {
            if self.state.events.scored(side) {
                self.state
                    .score
                    .board_mut(side)
                    .reset_display(&mut self.renderer)?;
            }
        }

        if self.state.events.winners.is_empty() {
            return Ok(());
        }

        // Each winner wipes the screen, so only the last banner stays up
        let winners = self.state.events.winners.clone();
        for side in winners {
            self.renderer.clear()?;
            self.state.score.left.forget_display();
            self.state.score.right.forget_display();
            self.renderer.set_background(victory_color(side))?;
            self.state
                .score
                .board_mut(side)
                .announce(&mut self.renderer, &victory_banner(side))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Align, Config, Frame, Phase, TextHandle};
    use glam::Vec2;
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Frame(Phase),
        Draw(String, Align),
        ClearText(TextHandle),
        Clear,
        Background(Color),
    }

    #[derive(Default)]
    struct MockRenderer {
        calls: Vec<Call>,
        next_handle: u32,
        fail_frames: bool,
    }

    impl MockRenderer {
        fn frames(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Frame(_)))
                .count()
        }

        fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Draw(text, _) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for MockRenderer {
        fn render_frame(&mut self, frame: &Frame) -> Result<(), DisplayError> {
            if self.fail_frames {
                return Err(DisplayError::Closed);
            }
            self.calls.push(Call::Frame(frame.phase));
            Ok(())
        }

        fn draw_text(
            &mut self,
            _pos: Vec2,
            text: &str,
            _font: crate::Font,
            align: Align,
        ) -> Result<TextHandle, DisplayError> {
            self.next_handle += 1;
            self.calls.push(Call::Draw(text.to_string(), align));
            Ok(TextHandle(self.next_handle))
        }

        fn clear_text(&mut self, handle: TextHandle) -> Result<(), DisplayError> {
            self.calls.push(Call::ClearText(handle));
            Ok(())
        }

        fn clear(&mut self) -> Result<(), DisplayError> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn set_background(&mut self, color: Color) -> Result<(), DisplayError> {
            self.calls.push(Call::Background(color));
            Ok(())
        }
    }

    #[derive(Default)]
    struct ScriptedEvents {
        keys: VecDeque<Vec<String>>,
        waits: Vec<Duration>,
        dismissed: bool,
    }

    impl EventSource for ScriptedEvents {
        fn wait(&mut self, delay: Duration) -> Result<Vec<String>, DisplayError> {
            self.waits.push(delay);
            Ok(self.keys.pop_front().unwrap_or_default())
        }

        fn await_dismissal(&mut self) -> Result<(), DisplayError> {
            self.dismissed = true;
            Ok(())
        }
    }

    fn game_loop(config: Config) -> GameLoop<MockRenderer, ScriptedEvents> {
        GameLoop::new(
            GameState::new(config),
            KeyBindings::default(),
            MockRenderer::default(),
            ScriptedEvents::default(),
        )
    }

    #[test]
    fn test_setup_draws_black_field_and_zero_scores() {
        let mut game = game_loop(Config::new());
        game.setup().unwrap();

        assert_eq!(game.renderer.calls[0], Call::Background(Color::Black));
        assert_eq!(game.renderer.texts(), vec!["0", "0"]);
    }

    #[test]
    fn test_keys_route_to_paddles() {
        let mut game = game_loop(Config::new());
        game.events.keys.push_back(vec![
            "Up".to_string(),
            "x".to_string(),
            "s".to_string(),
            "Up".to_string(),
        ]);

        game.run_tick().unwrap();

        assert_eq!(game.state.paddle(Side::Right).pos.y, 80.0);
        assert_eq!(game.state.paddle(Side::Left).pos.y, -40.0);
        assert!(game.state.input_queue.is_empty());
    }

    #[test]
    fn test_tick_waits_for_current_delay() {
        let mut game = game_loop(Config::new());
        game.run_tick().unwrap();

        assert_eq!(game.events.waits, vec![Duration::from_secs_f32(0.1)]);
        assert_eq!(game.renderer.frames(), 1, "One frame per tick");
    }

    #[test]
    fn test_point_redraws_only_scoring_board() {
        let mut game = game_loop(Config::new());
        game.setup().unwrap();
        game.state
            .place_ball(Vec2::new(505.0, 300.0), Vec2::new(10.0, 10.0));

        game.run_tick().unwrap();

        assert_eq!(game.renderer.texts(), vec!["0", "0", "1"]);
        assert!(
            game.renderer.calls.contains(&Call::ClearText(TextHandle(2))),
            "Left board (drawn second) is cleared before redraw"
        );
        assert_eq!(game.state.score.get(Side::Left), 1);
    }

    #[test]
    fn test_full_match_to_one_point() {
        let config = Config {
            win_score: 1,
            ..Config::default()
        };
        let mut game = game_loop(config);

        let winner = game.run().unwrap();

        // Kickoff path reaches x=520 on tick 52 without touching a paddle
        assert_eq!(winner, Some(Side::Left));
        assert_eq!(game.state.tick, 52);
        assert_eq!(game.state.phase, Phase::Finished);
        assert!(game.events.dismissed);
        assert_eq!(game.events.waits.len(), 52);
        assert_eq!(game.renderer.frames(), 53, "Every tick plus the final frame");
        assert_eq!(
            game.renderer.calls.last(),
            Some(&Call::Frame(Phase::Finished))
        );

        let calls = &game.renderer.calls;
        assert!(calls.contains(&Call::Clear));
        assert!(calls.contains(&Call::Background(Color::Blue)));
        assert!(calls.contains(&Call::Draw(
            "*******Player_2 WIN*******".to_string(),
            Align::Center
        )));
    }

    #[test]
    fn test_right_victory_is_red() {
        let mut game = game_loop(Config::new());
        game.setup().unwrap();
        for _ in 0..9 {
            game.state.score.increment_right();
        }
        game.state
            .place_ball(Vec2::new(-505.0, 300.0), Vec2::new(-10.0, 10.0));

        game.run_tick().unwrap();

        assert_eq!(game.state.winner(), Some(Side::Right));
        assert!(game.renderer.calls.contains(&Call::Background(Color::Red)));
        assert_eq!(
            game.renderer.texts().last().map(String::as_str),
            Some("*******Player_1 WIN*******")
        );
    }

    #[test]
    fn test_double_victory_leaves_only_player_2_banner() {
        let mut game = game_loop(Config::new());
        game.setup().unwrap();
        for _ in 0..10 {
            game.state.score.increment_left();
        }
        for _ in 0..9 {
            game.state.score.increment_right();
        }
        game.state
            .place_ball(Vec2::new(-505.0, 300.0), Vec2::new(-10.0, 10.0));

        game.run_tick().unwrap();

        assert_eq!(game.state.events.winners, vec![Side::Right, Side::Left]);
        let calls = &game.renderer.calls;
        let victory = &calls[calls.len() - 6..];
        assert_eq!(
            victory,
            &[
                Call::Clear,
                Call::Background(Color::Red),
                Call::Draw("*******Player_1 WIN*******".to_string(), Align::Center),
                Call::Clear,
                Call::Background(Color::Blue),
                Call::Draw("*******Player_2 WIN*******".to_string(), Align::Center),
            ],
            "Player 1's banner is wiped before Player 2's is drawn"
        );
    }

    #[test]
    fn test_display_failure_stops_loop() {
        let mut game = game_loop(Config::new());
        game.renderer.fail_frames = true;

        let result = game.run();

        assert!(matches!(result, Err(DisplayError::Closed)));
        assert_eq!(game.state.tick, 0, "No tick runs after the failure");
        assert!(!game.events.dismissed);
    }
}
