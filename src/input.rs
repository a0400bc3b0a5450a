//! Input mapping
//!
//! Turns held direction keys into a paddle velocity. The simulation only
//! sees the resulting `dx`.

use crate::sim::GameState;

/// Held direction keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Build from the names of the currently held keys
    pub fn from_key_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut keys = Self::default();
        for name in names {
            keys.press(name);
        }
        keys
    }

    /// Mark a key held; unknown names are ignored
    pub fn press(&mut self, name: &str) {
        self.set(name, true);
    }

    pub fn release(&mut self, name: &str) {
        self.set(name, false);
    }

    fn set(&mut self, name: &str, held: bool) {
        match name {
            "ArrowLeft" | "Left" => self.left = held,
            "ArrowRight" | "Right" => self.right = held,
            _ => {}
        }
    }

    /// Paddle velocity for these keys (left wins when both are held)
    pub fn paddle_dx(&self, speed: f32) -> f32 {
        if self.left {
            -speed
        } else if self.right {
            speed
        } else {
            0.0
        }
    }
}

/// Demo player: keeps the paddle under the ball
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// No movement while the ball is this close to the paddle center
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { dead_zone: 4.0 }
    }
}

impl Autopilot {
    pub fn keys(&self, state: &GameState) -> KeyState {
        // Aim at where the ball will be next frame
        let target = state.ball.predicted().x;
        let offset = target - state.paddle.center_x();
        KeyState {
            left: offset < -self.dead_zone,
            right: offset > self.dead_zone,
        }
    }
}
