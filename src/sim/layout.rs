//! Block layouts
//!
//! Blocks are built once per round and never added afterward.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Arena, Block, BlockKind};
use crate::consts::*;

/// How the round's blocks are arranged
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Two standard blocks top-left, two hard blocks mid-field
    #[default]
    Classic,
    /// Seeded grid under the score bar
    Grid {
        rows: u32,
        cols: u32,
        /// Chance (0-100) that a block is hard
        hard_percent: u32,
        seed: u64,
    },
}

/// How many cells of `size` (separated by `BLOCK_GAP`) fit in `span`
fn fit_count(span: f32, size: f32) -> usize {
    if span < size {
        0
    } else {
        ((span + BLOCK_GAP) / (size + BLOCK_GAP)).floor() as usize
    }
}

/// Build the block list for a layout
///
/// Grid rows and columns are capped to what fits between the score bar,
/// the side walls and the paddle row.
pub fn build_blocks(layout: &Layout, arena: &Arena) -> Vec<Block> {
    match layout {
        Layout::Classic => classic_blocks(),
        Layout::Grid {
            rows,
            cols,
            hard_percent,
            seed,
        } => grid_blocks(arena, *rows, *cols, *hard_percent, *seed),
    }
}

fn classic_blocks() -> Vec<Block> {
    vec![
        Block::standard(10.0, 40.0, BLOCK_WIDTH, BLOCK_HEIGHT),
        Block::standard(72.0, 40.0, BLOCK_WIDTH, BLOCK_HEIGHT),
        Block::hard(196.0, 130.0, BLOCK_WIDTH, BLOCK_HEIGHT),
        Block::hard(258.0, 130.0, BLOCK_WIDTH, BLOCK_HEIGHT),
    ]
}

fn grid_blocks(arena: &Arena, rows: u32, cols: u32, hard_percent: u32, seed: u64) -> Vec<Block> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let hard_percent = hard_percent.min(100);

    // First row sits one double gap under the bar; the last row must end one
    // double gap above the paddle so every block stays reachable
    let y0 = arena.hud_height + BLOCK_GAP * 2.0;
    let floor = PADDLE_START_Y.min(arena.height) - BLOCK_GAP * 2.0;
    let max_rows = fit_count(floor - y0, BLOCK_HEIGHT);
    let max_cols = fit_count(arena.width, BLOCK_WIDTH);

    let rows = (rows as usize).min(max_rows);
    let cols = (cols as usize).min(max_cols);
    if rows * cols == 0 {
        log::warn!("Grid layout has no room on a {}x{} canvas", arena.width, arena.height);
    }

    // Center the grid horizontally
    let total_width = cols as f32 * BLOCK_WIDTH + cols.saturating_sub(1) as f32 * BLOCK_GAP;
    let x0 = ((arena.width - total_width) / 2.0).max(0.0);

    let mut blocks = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let rect = Rect::new(
                x0 + col as f32 * (BLOCK_WIDTH + BLOCK_GAP),
                y0 + row as f32 * (BLOCK_HEIGHT + BLOCK_GAP),
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
            );
            let kind = if rng.random_range(0..100) < hard_percent {
                BlockKind::hard()
            } else {
                BlockKind::Standard
            };
            blocks.push(Block::new(rect, kind));
        }
    }

    log::debug!(
        "Generated {}x{} grid (seed {}): {} hard blocks",
        rows,
        cols,
        seed,
        blocks.iter().filter(|b| b.hp().is_some()).count()
    );
    blocks
}
