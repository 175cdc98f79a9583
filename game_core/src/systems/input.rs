use hecs::World;

use crate::{Config, InputQueue, Paddle, PaddleMove};

/// Apply every queued paddle command, oldest first
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue, config: &Config) {
    for command in input_queue.drain() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side != command.side {
                continue;
            }
            match command.dir {
                PaddleMove::Up => paddle.move_up(config.paddle_step),
                PaddleMove::Down => paddle.move_down(config.paddle_step),
            }
        }
    }
}
