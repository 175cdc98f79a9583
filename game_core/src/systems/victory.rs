use crate::{Config, Events, Phase, Score, Side};
use tracing::info;

/// Finish the match when a side sits on the win score.
///
/// Both sides are checked unconditionally, Player 1 (right) first, so if
/// both ever qualify in one tick both are recorded.
pub fn check_victory(score: &Score, config: &Config, phase: &mut Phase, events: &mut Events) {
    for side in Side::BOTH {
        if score.has_won(side, config.win_score) {
            *phase = Phase::Finished;
            events.winners.push(side);
            info!(player = side.player_number(), "match won");
        }
    }
}
