//! Player preferences
//!
//! Sound and pacing options. Read from JSON at startup; unknown or missing
//! fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{SEARCH_STEP_MS, TIMER_TICK_MS};
use crate::error::ConfigError;
use crate::sim::Scheduler;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects on/off
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Pacing ===
    /// Countdown tick interval
    pub timer_tick_ms: u32,
    /// Delay between search animation steps
    pub search_step_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            timer_tick_ms: TIMER_TICK_MS,
            search_step_ms: SEARCH_STEP_MS,
        }
    }
}

impl Settings {
    /// Parse settings JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective volume (0 when sound is off)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume
        } else {
            0.0
        }
    }

    /// Flip sound on/off, returning the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Scheduler paced by these settings
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.timer_tick_ms, self.search_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"sound_enabled": false}"#).unwrap();
        assert!(!settings.sound_enabled);
        assert_eq!(settings.search_step_ms, SEARCH_STEP_MS);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_volume_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.5}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_sound());
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Settings::from_json("{\"timer_tick_ms\": -4}").is_err());
        assert!(Settings::from_json("[").is_err());
    }
}
