//! Game state and core simulation types
//!
//! Entities are plain data: they expose geometry and per-variant values,
//! while collision decisions live in `collision` and ordering in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{Layout, build_blocks};
use super::rect::Rect;
use crate::consts::*;

/// Outcome of the round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundResult {
    /// Round in progress
    #[default]
    Playing,
    /// Ball crossed the bottom edge
    GameOver,
    /// Every block destroyed
    GameClear,
}

impl RoundResult {
    /// Human-readable result shown by the view container
    pub fn message(&self) -> &'static str {
        match self {
            RoundResult::Playing => "",
            RoundResult::GameOver => "game over",
            RoundResult::GameClear => "game clear",
        }
    }

    /// GameOver and GameClear have no transitions out
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundResult::Playing)
    }
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Height of the score bar at the top; the ball bounces off its lower edge
    pub hud_height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            hud_height: HUD_HEIGHT,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed for the ball's lifetime
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(
            Vec2::new(BALL_START_X, BALL_START_Y),
            Vec2::new(BALL_START_DX, BALL_START_DY),
            BALL_RADIUS,
        )
    }
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self { pos, vel, radius }
    }

    /// Position after this tick's velocity is applied
    #[inline]
    pub fn predicted(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Bounding square around the current position
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity, set from input each frame
    pub dx: f32,
    /// Magnitude used by the input mapper
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_START_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dx: 0.0,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn predicted_x(&self) -> f32 {
        self.pos.x + self.dx
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn advance(&mut self) {
        self.pos.x += self.dx;
    }
}

/// Block variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    /// Destroyed by the first hit
    #[default]
    Standard,
    /// Absorbs hits until `hp` reaches zero
    Hard { hp: u8 },
}

impl BlockKind {
    /// A fresh hard block
    pub const fn hard() -> Self {
        BlockKind::Hard { hp: HARD_BLOCK_HP }
    }

    /// Points awarded when a block of this kind is destroyed
    pub fn points(&self) -> u64 {
        match self {
            BlockKind::Standard => STANDARD_BLOCK_POINTS,
            BlockKind::Hard { .. } => HARD_BLOCK_POINTS,
        }
    }
}

/// What a single hit did to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHit {
    /// Block was already inactive
    Ignored,
    /// Hard block survived with `hp_left` hits remaining
    Damaged { hp_left: u8 },
    /// Block became inactive; `points` are owed to the score
    Destroyed { points: u64 },
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
    /// Starts true, only ever goes false
    active: bool,
}

impl Block {
    pub fn new(rect: Rect, kind: BlockKind) -> Self {
        Self {
            rect,
            kind,
            active: true,
        }
    }

    pub fn standard(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Rect::new(x, y, width, height), BlockKind::Standard)
    }

    pub fn hard(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Rect::new(x, y, width, height), BlockKind::hard())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> u64 {
        self.kind.points()
    }

    /// Remaining hit points (None for standard blocks)
    pub fn hp(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Standard => None,
            BlockKind::Hard { hp } => Some(hp),
        }
    }

    /// Apply one qualifying hit
    pub fn hit(&mut self) -> BlockHit {
        if !self.active {
            return BlockHit::Ignored;
        }
        let points = self.kind.points();
        match &mut self.kind {
            BlockKind::Standard => {
                self.active = false;
                BlockHit::Destroyed { points }
            }
            BlockKind::Hard { hp } => {
                *hp = hp.saturating_sub(1);
                if *hp == 0 {
                    self.active = false;
                    BlockHit::Destroyed { points }
                } else {
                    BlockHit::Damaged { hp_left: *hp }
                }
            }
        }
    }
}

/// Score accumulator (never decreases)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn add(&mut self, points: u64) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Complete round state (deterministic, serializable for debugging)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed at round start; destroyed blocks stay in place, inactive
    pub blocks: Vec<Block>,
    pub score: Score,
    pub result: RoundResult,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default(), &Layout::Classic)
    }
}

impl GameState {
    /// Start a round with the default ball and paddle
    pub fn new(arena: Arena, layout: &Layout) -> Self {
        Self::with_blocks(arena, build_blocks(layout, &arena))
    }

    /// Start a round with an explicit block list
    pub fn with_blocks(arena: Arena, blocks: Vec<Block>) -> Self {
        Self {
            arena,
            ball: Ball::default(),
            paddle: Paddle::default(),
            blocks,
            score: Score::default(),
            result: RoundResult::Playing,
            time_ticks: 0,
        }
    }

    pub fn all_blocks_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.is_active())
    }

    pub fn active_block_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_active()).count()
    }
}
