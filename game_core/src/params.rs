/// Game tuning parameters for Pong
///
/// Distances are in pixels, speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_PADDLE_X: f32 = 10.0; // Offset from the left edge
    pub const AI_PADDLE_INSET: f32 = 20.0; // Offset from the right edge
    pub const PLAYER_STEP: f32 = 10.0;
    pub const AI_STEP: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Match
    pub const DEFAULT_WIN_SCORE: u32 = 5; // Best of 5

    // Timing
    pub const FPS: u32 = 60;
    pub const EXIT_DELAY_MS: u64 = 500;
}
