//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - State changes only on explicit commands, ticks and search steps
//! - No rendering, audio or platform dependencies

pub mod command;
pub mod level;
pub mod pattern;
pub mod search;
pub mod slots;
pub mod state;
pub mod tick;

pub use command::Command;
pub use level::{GameConfig, Level, SeedLayout};
pub use pattern::{PatternGenerator, TargetPattern, compare_form, find_first, parse_pattern};
pub use search::{SearchAnimator, SearchState};
pub use slots::SlotArray;
pub use state::{GameEvent, GamePhase, GameSession, SessionSnapshot, WinRecord};
pub use tick::{PeriodicTask, Scheduler};
