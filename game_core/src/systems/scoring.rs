use crate::{Ball, Config, Events, Score, Side, TickDelay};
use hecs::World;
use tracing::debug;

/// Check if ball left the field (scoring)
///
/// Crossing the right line is a point for the left player and vice versa.
/// Every point speeds the game up and serves from the center with the
/// horizontal direction reversed. Both edges are checked every tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    tick_delay: &mut TickDelay,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x > config.score_x {
            award_point(Side::Left, ball, config, score, tick_delay, events);
        }

        if ball.pos.x < -config.score_x {
            award_point(Side::Right, ball, config, score, tick_delay, events);
        }
    }
}

fn award_point(
    side: Side,
    ball: &mut Ball,
    config: &Config,
    score: &mut Score,
    tick_delay: &mut TickDelay,
    events: &mut Events,
) {
    score.increment(side);
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    tick_delay.speed_up(config);
    ball.serve();

    debug!(
        player = side.player_number(),
        left = score.get(Side::Left),
        right = score.get(Side::Right),
        tick_delay = tick_delay.seconds,
        "point scored"
    );
}
