//! Per-frame simulation tick
//!
//! Core game loop that advances the round deterministically: all collision
//! checks run against pre-movement state in a fixed order, then positions
//! advance, then the round result is evaluated.

use super::collision::{PaddleClamp, WallBounce, ball_blocks, ball_paddle, ball_wall, paddle_wall};
use super::state::{BlockHit, GameState, RoundResult};
use crate::audio::{CuePlayer, SoundCue};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce(WallBounce),
    PaddleHit,
    PaddleClamped(PaddleClamp),
    /// Hard block absorbed a hit
    BlockHit { index: usize, hp_left: u8 },
    BlockDestroyed { index: usize, points: u64 },
    RoundEnded(RoundResult),
}

/// Advance the round by one frame
///
/// Returns the events of this tick (empty once the round is over).
pub fn tick(state: &mut GameState, audio: &mut dyn CuePlayer) -> Vec<GameEvent> {
    if state.result.is_terminal() {
        return Vec::new();
    }

    state.time_ticks += 1;
    let mut events = Vec::new();

    // 1. Ball vs walls
    if let Some(bounce) = ball_wall(&mut state.ball, &state.arena) {
        log::trace!("tick {}: wall bounce {:?}", state.time_ticks, bounce);
        events.push(GameEvent::WallBounce(bounce));
    }

    // 2. Ball vs paddle
    if ball_paddle(&mut state.ball, &state.paddle) {
        log::debug!("tick {}: paddle hit at x={:.1}", state.time_ticks, state.ball.pos.x);
        audio.play(SoundCue::PaddleHit);
        events.push(GameEvent::PaddleHit);
    }

    // 3. Paddle vs walls
    if let Some(clamp) = paddle_wall(&mut state.paddle, &state.arena) {
        log::trace!("tick {}: paddle clamped {:?}", state.time_ticks, clamp);
        events.push(GameEvent::PaddleClamped(clamp));
    }

    // 4. Ball vs blocks
    for contact in ball_blocks(&mut state.ball, &mut state.blocks, &mut state.score) {
        match contact.hit {
            BlockHit::Damaged { hp_left } => {
                log::debug!(
                    "tick {}: block {} hit, {} hp left",
                    state.time_ticks,
                    contact.index,
                    hp_left
                );
                events.push(GameEvent::BlockHit {
                    index: contact.index,
                    hp_left,
                });
            }
            BlockHit::Destroyed { points } => {
                log::debug!(
                    "tick {}: block {} destroyed (+{}, score {})",
                    state.time_ticks,
                    contact.index,
                    points,
                    state.score.value()
                );
                events.push(GameEvent::BlockDestroyed {
                    index: contact.index,
                    points,
                });
            }
            BlockHit::Ignored => continue,
        }
        audio.play(SoundCue::BlockHit);
    }

    // Movement, using the velocities decided above
    let pre_move_y = state.ball.pos.y;
    state.ball.advance();
    state.paddle.advance();

    let result = evaluate_result(state, pre_move_y);
    if result.is_terminal() {
        state.result = result;
        log::info!(
            "Round ended after {} ticks: {} (score {})",
            state.time_ticks,
            result.message(),
            state.score.value()
        );
        events.push(GameEvent::RoundEnded(result));
    }

    events
}

/// Decide the round result from the ball's pre-move `ball_y`
///
/// GameOver is checked first and wins when both conditions hold.
pub fn evaluate_result(state: &GameState, ball_y: f32) -> RoundResult {
    let ball = &state.ball;
    if state.arena.height - ball.radius < ball_y + ball.vel.y {
        RoundResult::GameOver
    } else if state.all_blocks_cleared() {
        RoundResult::GameClear
    } else {
        RoundResult::Playing
    }
}
