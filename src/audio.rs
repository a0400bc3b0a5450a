//! Sound cues
//!
//! The simulation fires cues and never waits on them. Backends implement
//! `CuePlayer`; `AudioManager` is the headless one used by the runner.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits block (breaking or not)
    BlockHit,
}

impl SoundCue {
    pub const ALL: [SoundCue; 2] = [SoundCue::PaddleHit, SoundCue::BlockHit];

    /// Asset a playback backend loads for this cue
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundCue::PaddleHit => "sounds/paddle_hit.mp3",
            SoundCue::BlockHit => "sounds/block_hit.mp3",
        }
    }
}

/// Fire-and-forget cue playback
pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Audio manager for the game
///
/// Holds the mixer levels and counts what it was asked to play.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: [u64; 2],
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: [0; 2],
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// How many times `cue` was audibly played
    pub fn play_count(&self, cue: SoundCue) -> u64 {
        self.played[Self::slot(cue)]
    }

    fn slot(cue: SoundCue) -> usize {
        match cue {
            SoundCue::PaddleHit => 0,
            SoundCue::BlockHit => 1,
        }
    }
}

impl CuePlayer for AudioManager {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played[Self::slot(cue)] += 1;
        log::debug!("play {} at volume {:.2}", cue.asset_path(), vol);
    }
}

/// Records every cue in order
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    cues: Vec<SoundCue>,
}

impl CueLog {
    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl CuePlayer for CueLog {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
