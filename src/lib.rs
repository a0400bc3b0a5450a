//! Block Breaker - A breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, scoring, round result)
//! - `audio`: Fire-and-forget sound cues
//! - `input`: Keyboard state to paddle velocity mapping
//! - `view`: Round visibility container
//! - `renderer`: Draw pass and software framebuffer
//! - `settings`: JSON-backed configuration

pub mod audio;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use audio::{AudioManager, CueLog, CuePlayer, SoundCue};
pub use input::{Autopilot, KeyState};
pub use settings::{Settings, SettingsError};
pub use view::GameView;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;
    /// Score bar reserved at the top of the canvas; the ball bounces below it
    pub const HUD_HEIGHT: f32 = 20.0;

    /// Ball spawn
    pub const BALL_START_X: f32 = 20.0;
    pub const BALL_START_Y: f32 = 440.0;
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = 2.0;

    /// Paddle spawn
    pub const PADDLE_START_X: f32 = 30.0;
    pub const PADDLE_START_Y: f32 = 460.0;
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Block scoring
    pub const STANDARD_BLOCK_POINTS: u64 = 10;
    pub const HARD_BLOCK_POINTS: u64 = 50;
    pub const HARD_BLOCK_HP: u8 = 3;

    /// Block defaults for generated layouts
    pub const BLOCK_WIDTH: f32 = 52.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 10.0;
}
