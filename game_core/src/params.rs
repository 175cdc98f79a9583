/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (origin at center)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 700.0;
    pub const WALL_Y: f32 = 340.0; // Top/bottom bounce line (inclusive)
    pub const SCORE_X: f32 = 510.0; // Ball beyond this is a point

    // Paddle
    pub const PADDLE_X: f32 = 470.0;
    pub const PADDLE_REACH_X: f32 = 450.0; // Ball must be at least this far out to hit
    pub const PADDLE_STEP: f32 = 40.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const HIT_RADIUS: f32 = 50.0; // Ball center to paddle anchor

    // Ball
    pub const BALL_SPEED: f32 = 10.0; // Units per tick on each axis
    pub const BALL_RADIUS: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u32 = 10;
    pub const SCOREBOARD_X: f32 = 100.0;
    pub const SCOREBOARD_Y: f32 = 250.0;

    // Pacing
    pub const INITIAL_TICK_DELAY: f32 = 0.1; // Seconds
    pub const TICK_DELAY_FACTOR: f32 = 0.5; // Applied on every point
    pub const MIN_TICK_DELAY: f32 = 0.0; // No floor
}
