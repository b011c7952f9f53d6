//! Target patterns and pattern matching
//!
//! Generation is driven by a caller-supplied RNG so a seeded session always
//! produces the same targets.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::slots::check_digit;
use crate::consts::MAX_DIGIT;
use crate::error::GameError;

/// The digits a level asks the player to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPattern {
    pub digits: Vec<u8>,
    /// Win requires the digits in reverse order
    pub reversed: bool,
}

impl TargetPattern {
    pub fn new(digits: Vec<u8>, reversed: bool) -> Result<Self, GameError> {
        if digits.is_empty() {
            return Err(GameError::InvalidPattern("pattern cannot be empty".into()));
        }
        for &digit in &digits {
            check_digit(digit)?;
        }
        Ok(Self { digits, reversed })
    }

    /// The sequence actually matched against the array
    pub fn compare_form(&self) -> Vec<u8> {
        compare_form(&self.digits, self.reversed)
    }

    /// Display form shown to the player, e.g. `[4, 1, 2] (reverse)`
    pub fn description(&self) -> String {
        let shown = format_digits(&self.compare_form());
        if self.reversed {
            format!("{shown} (reverse)")
        } else {
            shown
        }
    }
}

/// `pattern` reversed when `reversed` is set, unchanged otherwise
pub fn compare_form(pattern: &[u8], reversed: bool) -> Vec<u8> {
    if reversed {
        pattern.iter().rev().copied().collect()
    } else {
        pattern.to_vec()
    }
}

/// Random digit source for targets and level seed layouts
#[derive(Debug, Clone)]
pub struct PatternGenerator<R = Pcg32> {
    rng: R,
}

impl PatternGenerator<Pcg32> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PatternGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// A single uniform digit in `0..=9`
    pub fn digit(&mut self) -> u8 {
        self.rng.random_range(0..=MAX_DIGIT)
    }

    /// Fresh target for `level`
    pub fn generate(&mut self, level: &Level) -> TargetPattern {
        let digits = (0..level.pattern_length).map(|_| self.digit()).collect();
        TargetPattern {
            digits,
            reversed: level.reversed,
        }
    }
}

/// Earliest index where `needle` occurs contiguously in `haystack`
pub fn find_first(haystack: &[u8], needle: &[u8]) -> Result<Option<usize>, GameError> {
    if needle.is_empty() {
        return Err(GameError::InvalidPattern("pattern cannot be empty".into()));
    }
    Ok(haystack.windows(needle.len()).position(|w| w == needle))
}

/// True when `needle` sits at `start` in `haystack`
pub(crate) fn matches_at(haystack: &[u8], needle: &[u8], start: usize) -> bool {
    haystack
        .get(start..start + needle.len())
        .is_some_and(|window| window == needle)
}

/// Parse user input like `2,1,4` into digits
pub fn parse_pattern(text: &str) -> Result<Vec<u8>, GameError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GameError::InvalidPattern(
            "enter a pattern to search, e.g. 2,1,4".into(),
        ));
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= MAX_DIGIT)
                .ok_or_else(|| {
                    GameError::InvalidPattern(format!(
                        "'{token}' is not a digit, use digits separated by commas"
                    ))
                })
        })
        .collect()
}

/// `[a, b, c]`
pub fn format_digits(digits: &[u8]) -> String {
    let parts: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
