//! Rendering module
//!
//! The draw pass reads the round state and issues fill requests to a
//! `Renderer`. It never mutates simulation state.

pub mod framebuffer;

pub use framebuffer::Framebuffer;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{BlockKind, GameState, Rect};

/// 8-bit RGBA color, laid out to match a raw pixel buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub const fn from_hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xff)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::from_hex(0xf5f0e6);
    pub const BALL: Rgba = Rgba::from_hex(0x2f4f4f);
    pub const PADDLE: Rgba = Rgba::from_hex(0x4682b4);
    pub const BLOCK_STANDARD: Rgba = Rgba::from_hex(0xa47f61);
    pub const BLOCK_HARD: Rgba = Rgba::from_hex(0xd2691e);
    pub const HUD_BAR: Rgba = Rgba::from_hex(0x333333);
    pub const HUD_SCORE: Rgba = Rgba::from_hex(0xffd700);
}

/// Points represented by one pip in the score bar
pub const POINTS_PER_PIP: u64 = 10;

/// A surface that can fill shapes
pub trait Renderer {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

pub fn block_color(kind: BlockKind) -> Rgba {
    match kind {
        BlockKind::Standard => colors::BLOCK_STANDARD,
        BlockKind::Hard { .. } => colors::BLOCK_HARD,
    }
}

/// Draw a full frame: background, ball, paddle, blocks, score bar
pub fn draw_round(state: &GameState, renderer: &mut dyn Renderer) {
    renderer.clear(colors::BACKGROUND);

    renderer.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);
    renderer.fill_rect(state.paddle.bounds(), colors::PADDLE);

    for block in state.blocks.iter().filter(|b| b.is_active()) {
        renderer.fill_rect(block.rect, block_color(block.kind));
    }

    draw_score_bar(state, renderer);
}

/// Score bar across the top, one pip per `POINTS_PER_PIP` points
fn draw_score_bar(state: &GameState, renderer: &mut dyn Renderer) {
    let arena = &state.arena;
    renderer.fill_rect(Rect::new(0.0, 0.0, arena.width, arena.hud_height), colors::HUD_BAR);

    let pip = arena.hud_height / 2.0;
    let margin = pip / 2.0;
    let max_pips = ((arena.width - margin) / (pip + margin)).max(0.0) as u64;
    let pips = (state.score.value() / POINTS_PER_PIP).min(max_pips);

    for i in 0..pips {
        let x = margin + i as f32 * (pip + margin);
        renderer.fill_rect(Rect::new(x, margin, pip, pip), colors::HUD_SCORE);
    }
}
