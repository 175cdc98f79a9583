pub mod bindings;
pub mod components;
pub mod config;
pub mod game;
pub mod game_loop;
pub mod params;
pub mod render;
pub mod resources;
pub mod scoreboard;
pub mod systems;

pub use bindings::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use game_loop::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scoreboard::*;

use hecs::World;
use systems::*;

/// Run one deterministic tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    tick_delay: &mut TickDelay,
    phase: &mut Phase,
    events: &mut Events,
    input_queue: &mut InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    if *phase == Phase::Finished {
        return;
    }

    // 1. Ingest inputs (queued paddle moves)
    ingest_inputs(world, input_queue, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 4. Check scoring (ball left the field)
    check_scoring(world, config, score, tick_delay, events);

    // 5. Check for a winner
    check_victory(score, config, phase, events);
}

/// Helper to create a paddle entity on its side's line
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config.paddle_x(side)),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
