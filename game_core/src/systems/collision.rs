use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    bounce_walls(world, config, events);
    bounce_paddles(world, config, events);
}

/// Flip vertical direction on or past the top and bottom lines.
///
/// The check is inclusive and the ball is not pushed back inside, so a ball
/// that is still past the line next tick flips again.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y >= config.wall_y || ball.pos.y <= -config.wall_y {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Flip horizontal direction when the ball is out at a paddle's line and
/// within the hit radius of that paddle's anchor point.
///
/// This is a point-distance test, not a box overlap: a ball may touch the
/// end of a paddle and pass through.
pub fn bounce_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = paddles.iter().any(|paddle| {
            let in_reach = match paddle.side {
                Side::Right => ball.pos.x >= config.paddle_reach_x,
                Side::Left => ball.pos.x <= -config.paddle_reach_x,
            };
            in_reach && ball.pos.distance(paddle.pos) <= config.hit_radius
        });

        if hit {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        }
    }
}
