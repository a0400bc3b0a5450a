//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only (layout generation)
//! - Stable iteration order (blocks by index, never removed)
//! - No rendering or platform dependencies; sound goes through `CuePlayer`

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    BlockContact, PaddleClamp, WallBounce, ball_blocks, ball_paddle, ball_wall, paddle_wall,
};
pub use layout::{Layout, build_blocks};
pub use rect::Rect;
pub use state::{Arena, Ball, Block, BlockHit, BlockKind, GameState, Paddle, RoundResult, Score};
pub use tick::{GameEvent, evaluate_result, tick};
