//! Sound cues
//!
//! Procedurally generated beeps - no external files needed! The cue table is
//! plain data so it can be tested natively; playback through the Web Audio
//! API only exists on wasm32.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Insert,
    Delete,
    /// Search started
    Search,
    /// Search found the pattern
    Success,
    /// Rejected command or failed search
    Error,
    /// Level cracked
    Victory,
    /// Timer ran out
    GameOver,
    /// Array cleared
    Reset,
    LevelUp,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Sine,
}

/// A single decaying tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
}

/// Starting gain of every tone, ramped down to `TONE_END_GAIN`
pub const TONE_START_GAIN: f32 = 0.1;
pub const TONE_END_GAIN: f32 = 0.01;

impl SoundEffect {
    /// Cue for an engine event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Inserted { .. } => Some(SoundEffect::Insert),
            GameEvent::Deleted { .. } => Some(SoundEffect::Delete),
            GameEvent::ArrayReset => Some(SoundEffect::Reset),
            GameEvent::SearchStarted { .. } => Some(SoundEffect::Search),
            GameEvent::SearchProgress { .. } => None,
            GameEvent::SearchFound { .. } => Some(SoundEffect::Success),
            GameEvent::SearchNotFound | GameEvent::InvalidCommand { .. } => {
                Some(SoundEffect::Error)
            }
            GameEvent::Won { .. } | GameEvent::AllLevelsComplete => Some(SoundEffect::Victory),
            GameEvent::TimedOut => Some(SoundEffect::GameOver),
            // The first level starts silently
            GameEvent::LevelStarted { level } => (*level > 1).then_some(SoundEffect::LevelUp),
        }
    }

    pub fn tone(&self) -> Tone {
        let (frequency, duration) = match self {
            SoundEffect::Insert => (800.0, 0.1),
            SoundEffect::Delete => (400.0, 0.15),
            SoundEffect::Search => (600.0, 0.2),
            SoundEffect::Success => (1000.0, 0.3),
            SoundEffect::Error => (200.0, 0.4),
            SoundEffect::Victory => (1200.0, 0.5),
            SoundEffect::GameOver => (150.0, 0.8),
            SoundEffect::Reset => (500.0, 0.2),
            SoundEffect::LevelUp => (900.0, 0.4),
        };
        let waveform = if *self == SoundEffect::Victory {
            Waveform::Sine
        } else {
            Waveform::Square
        };
        Tone {
            frequency,
            duration,
            waveform,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, OscillatorType};

    use super::{SoundEffect, TONE_END_GAIN, TONE_START_GAIN, Waveform};
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 1.0,
                muted: false,
            }
        }

        /// Set master volume (0.0 - 1.0)
        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn is_muted(&self) -> bool {
            self.muted
        }

        /// Play the cue for every event that has one
        pub fn play_events(&self, events: &[GameEvent]) {
            for effect in events.iter().filter_map(SoundEffect::for_event) {
                self.play(effect);
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.muted || self.master_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let tone = effect.tone();
            let Ok(osc) = ctx.create_oscillator() else { return };
            let Ok(gain) = ctx.create_gain() else { return };

            osc.set_type(match tone.waveform {
                Waveform::Square => OscillatorType::Square,
                Waveform::Sine => OscillatorType::Sine,
            });
            if osc.connect_with_audio_node(&gain).is_err()
                || gain.connect_with_audio_node(&ctx.destination()).is_err()
            {
                return;
            }

            let t = ctx.current_time();
            let duration = f64::from(tone.duration);
            osc.frequency().set_value_at_time(tone.frequency, t).ok();
            gain.gain()
                .set_value_at_time(TONE_START_GAIN * self.master_volume, t)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(TONE_END_GAIN * self.master_volume, t + duration)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + duration).ok();
        }
    }
}
