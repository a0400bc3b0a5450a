//! Whole-round tests driven through the public API

use block_breaker::sim::{Arena, Block, GameEvent, GameState, RoundResult, tick};
use block_breaker::{Autopilot, CueLog, GameView, KeyState, SoundCue};
use glam::Vec2;
use proptest::prelude::*;

#[test]
fn idle_paddle_loses_default_round() {
    let mut view = GameView::default();
    let mut audio = CueLog::default();
    let mut paddle_hits = Vec::new();
    let mut hard_hits = Vec::new();

    while view.is_visible() {
        for event in view.update(&mut audio) {
            match event {
                GameEvent::PaddleHit => paddle_hits.push(view.state().time_ticks),
                GameEvent::BlockHit { index, hp_left } => hard_hits.push((index, hp_left)),
                _ => {}
            }
        }
        assert!(view.state().time_ticks < 10_000, "round never ended");
    }

    assert_eq!(view.result(), RoundResult::GameOver);
    assert_eq!(view.result_message(), "game over");
    assert_eq!(view.state().time_ticks, 744);
    assert_eq!(view.state().score.value(), 0);
    assert_eq!(paddle_hits, vec![8, 436]);
    assert_eq!(hard_hits, vec![(3, 2)]);
    assert_eq!(
        audio.cues(),
        &[SoundCue::PaddleHit, SoundCue::PaddleHit, SoundCue::BlockHit]
    );
}

#[test]
fn autopilot_clears_default_round() {
    let mut view = GameView::default();
    let mut audio = CueLog::default();
    let pilot = Autopilot::default();
    let mut frames = 0;

    while view.is_visible() && frames < 10_000 {
        let keys = pilot.keys(view.state());
        view.apply_input(&keys);
        view.update(&mut audio);
        frames += 1;
    }

    assert_eq!(view.result(), RoundResult::GameClear);
    assert_eq!(view.result_message(), "game clear");
    assert_eq!(frames, 2428);
    // Two standard blocks and two hard blocks
    assert_eq!(view.state().score.value(), 2 * 10 + 2 * 50);
    assert!(view.state().all_blocks_cleared());
}

#[test]
fn ticks_after_game_over_change_nothing() {
    let mut state = GameState::default();
    state.ball.pos = Vec2::new(200.0, 474.0);
    let mut audio = CueLog::default();

    tick(&mut state, &mut audio);
    assert_eq!(state.result, RoundResult::GameOver);

    let snapshot = serde_json::to_string(&state).unwrap();
    for _ in 0..10 {
        assert!(tick(&mut state, &mut audio).is_empty());
    }
    assert_eq!(serde_json::to_string(&state).unwrap(), snapshot);
}

/// Drive the ball straight up into the block at `index` from just below it
fn strike(state: &mut GameState, index: usize, audio: &mut CueLog) -> Vec<GameEvent> {
    let rect = state.blocks[index].rect;
    state.ball.pos = Vec2::new(rect.center().x, rect.bottom() + 4.0);
    state.ball.vel = Vec2::new(0.0, -2.0);
    tick(state, audio)
}

fn spaced_blocks() -> Vec<Block> {
    vec![
        Block::standard(40.0, 60.0, 52.0, 20.0),
        Block::hard(160.0, 60.0, 52.0, 20.0),
        Block::standard(280.0, 60.0, 52.0, 20.0),
    ]
}

proptest! {
    #[test]
    fn score_and_paddle_invariants(
        keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..1500)
    ) {
        let mut view = GameView::default();
        let mut audio = CueLog::default();
        let arena = view.state().arena;
        let mut last_score = 0;
        let mut was_active: Vec<bool> = view.state().blocks.iter().map(|b| b.is_active()).collect();

        for (left, right) in keys {
            view.apply_input(&KeyState { left, right });
            let events = view.update(&mut audio);
            let state = view.state();

            let score = state.score.value();
            prop_assert!(score >= last_score);

            let earned: u64 = events
                .iter()
                .filter_map(|e| match e {
                    GameEvent::BlockDestroyed { points, .. } => Some(*points),
                    _ => None,
                })
                .sum();
            prop_assert_eq!(score - last_score, earned);
            last_score = score;

            let paddle = &state.paddle;
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.pos.x <= arena.width - paddle.width);

            for (block, was) in state.blocks.iter().zip(was_active.iter_mut()) {
                prop_assert!(*was || !block.is_active(), "block reactivated");
                *was = block.is_active();
            }
        }
    }

    #[test]
    fn clear_only_after_every_block(order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
        let mut state = GameState::with_blocks(Arena::default(), spaced_blocks());
        let mut audio = CueLog::default();

        for (n, &index) in order.iter().enumerate() {
            let hits_needed = if state.blocks[index].hp().is_some() { 3 } else { 1 };
            for _ in 0..hits_needed {
                prop_assert_eq!(state.result, RoundResult::Playing);
                strike(&mut state, index, &mut audio);
            }
            prop_assert!(!state.blocks[index].is_active());
            if n + 1 < order.len() {
                prop_assert_eq!(state.result, RoundResult::Playing);
            }
        }

        prop_assert_eq!(state.result, RoundResult::GameClear);
        prop_assert_eq!(state.score.value(), 10 + 50 + 10);
        prop_assert_eq!(audio.cues().len(), 5);
    }
}
