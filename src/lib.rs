//! Array Hack - a code-cracking puzzle about array operations
//!
//! Core modules:
//! - `sim`: Deterministic game engine (slot array, patterns, search, levels)
//! - `audio`: Sound cues for game events (Web Audio playback on wasm32)
//! - `platform`: Browser bindings
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, GameError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of slots in the array
    pub const CAPACITY: usize = 10;
    /// Largest value a slot can hold
    pub const MAX_DIGIT: u8 = 9;

    /// Countdown tick interval
    pub const TIMER_TICK_MS: u32 = 1000;
    /// Delay between search animation steps
    pub const SEARCH_STEP_MS: u32 = 400;

    /// Longest frame the scheduler will account for
    pub const MAX_FRAME_MS: u32 = 2000;
    /// Maximum steps per task per frame to prevent spiral of death
    pub const MAX_CATCHUP_STEPS: u32 = 8;
}
