//! Game view
//!
//! Owns a round and decides whether it still receives ticks. Once the round
//! reaches a terminal result the view hides itself and publishes the message;
//! the owning screen stops calling `update` and shows the result.

use crate::audio::CuePlayer;
use crate::input::KeyState;
use crate::renderer::{Renderer, draw_round};
use crate::sim::{Arena, GameEvent, GameState, Layout, RoundResult, tick};

pub struct GameView {
    state: GameState,
    visible: bool,
    paused: bool,
    result_message: String,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

impl GameView {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            visible: true,
            paused: false,
            result_message: String::new(),
        }
    }

    pub fn with_layout(arena: Arena, layout: &Layout) -> Self {
        Self::new(GameState::new(arena, layout))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn result(&self) -> RoundResult {
        self.state.result
    }

    /// Empty until the round ends
    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    pub fn toggle_pause(&mut self) {
        if self.visible {
            self.paused = !self.paused;
            log::info!("Round {}", if self.paused { "paused" } else { "resumed" });
        }
    }

    /// Map held keys onto the paddle for the next tick
    pub fn apply_input(&mut self, keys: &KeyState) {
        if !self.visible {
            return;
        }
        let paddle = &mut self.state.paddle;
        paddle.dx = keys.paddle_dx(paddle.speed);
    }

    /// Run one frame of simulation
    pub fn update(&mut self, audio: &mut dyn CuePlayer) -> Vec<GameEvent> {
        if !self.visible || self.paused {
            return Vec::new();
        }

        let events = tick(&mut self.state, audio);

        if self.state.result.is_terminal() {
            self.visible = false;
            self.result_message = self.state.result.message().to_string();
        }
        events
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        draw_round(&self.state, renderer);
    }
}
