//! Level table
//!
//! Levels are plain data so new ones can be added (or loaded from JSON)
//! without touching the session logic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pattern::PatternGenerator;
use super::slots::SlotArray;
use crate::consts::{CAPACITY, MAX_DIGIT};
use crate::error::ConfigError;

/// How the array is filled when a level starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedLayout {
    /// Exact slot contents
    Fixed(Vec<Option<u8>>),
    /// A fresh random digit in each listed slot
    RandomAt(Vec<usize>),
}

impl SeedLayout {
    /// Fill a fresh array. Entries that do not fit are skipped; `GameConfig::validate`
    /// reports them up front.
    pub fn build<R: Rng>(&self, generator: &mut PatternGenerator<R>) -> SlotArray {
        let mut slots = [None; CAPACITY];
        match self {
            SeedLayout::Fixed(values) => {
                for (slot, value) in slots.iter_mut().zip(values) {
                    *slot = value.filter(|d| *d <= MAX_DIGIT);
                }
            }
            SeedLayout::RandomAt(indices) => {
                for &index in indices {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(generator.digit());
                    }
                }
            }
        }
        SlotArray::from_slots(&slots).unwrap_or_default()
    }
}

/// One level definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level number
    pub index: u32,
    pub pattern_length: usize,
    pub time_limit_secs: u32,
    /// Target must be built back-to-front
    pub reversed: bool,
    pub description: String,
    pub seed: SeedLayout,
}

/// Ordered level table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub levels: Vec<Level>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                Level {
                    index: 1,
                    pattern_length: 2,
                    time_limit_secs: 60,
                    reversed: false,
                    description: "Find any 2-digit pattern".into(),
                    seed: SeedLayout::Fixed(vec![
                        Some(3),
                        Some(1),
                        Some(7),
                        None,
                        Some(2),
                        Some(1),
                        Some(4),
                        Some(9),
                        None,
                        None,
                    ]),
                },
                Level {
                    index: 2,
                    pattern_length: 3,
                    time_limit_secs: 45,
                    reversed: false,
                    description: "Find a 3-digit pattern".into(),
                    seed: SeedLayout::RandomAt(vec![0, 2, 5]),
                },
                Level {
                    index: 3,
                    pattern_length: 3,
                    time_limit_secs: 30,
                    reversed: true,
                    description: "Find a pattern in reverse order".into(),
                    seed: SeedLayout::RandomAt(vec![0, 2, 5]),
                },
            ],
        }
    }
}

impl GameConfig {
    /// Parse and validate a level table
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::InvalidLevels("no levels defined".into()));
        }
        for (i, level) in self.levels.iter().enumerate() {
            let expected = i as u32 + 1;
            if level.index != expected {
                return Err(ConfigError::InvalidLevels(format!(
                    "level {} is listed at position {expected}",
                    level.index
                )));
            }
            if level.pattern_length == 0 || level.pattern_length > CAPACITY {
                return Err(ConfigError::InvalidLevels(format!(
                    "level {expected}: pattern length must be 1-{CAPACITY}"
                )));
            }
            if level.time_limit_secs == 0 {
                return Err(ConfigError::InvalidLevels(format!(
                    "level {expected}: time limit must be positive"
                )));
            }
            let seed_ok = match &level.seed {
                SeedLayout::Fixed(slots) => {
                    slots.len() <= CAPACITY && slots.iter().flatten().all(|d| *d <= MAX_DIGIT)
                }
                SeedLayout::RandomAt(indices) => indices.iter().all(|i| *i < CAPACITY),
            };
            if !seed_ok {
                return Err(ConfigError::InvalidLevels(format!(
                    "level {expected}: seed layout does not fit {CAPACITY} slots"
                )));
            }
        }
        Ok(())
    }

    pub fn last_index(&self) -> u32 {
        self.levels.len() as u32
    }
}
