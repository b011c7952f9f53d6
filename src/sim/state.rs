//! Game session state and level lifecycle
//!
//! A `GameSession` owns everything one player's run needs: the slot array,
//! the current target, the countdown and the active search. Front ends drive
//! it through commands and read back the queued `GameEvent`s.

use serde::{Deserialize, Serialize};

use super::level::{GameConfig, Level};
use super::pattern::{PatternGenerator, TargetPattern, find_first, parse_pattern};
use super::search::{SearchAnimator, SearchState};
use super::slots::SlotArray;
use crate::error::{ConfigError, GameError};

/// Current phase of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timer running, array commands accepted
    Playing,
    /// Target found; on the last level this is the completion state
    Won,
    /// Countdown reached zero
    TimedOut,
}

/// Something the front end should render, narrate or play a sound for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Inserted { index: usize, value: u8 },
    Deleted { index: usize, value: u8 },
    ArrayReset,
    SearchStarted { pattern: Vec<u8> },
    /// Window at this compacted position is being compared
    SearchProgress { cursor: usize },
    SearchFound { index: usize },
    SearchNotFound,
    Won { time_used: u32 },
    TimedOut,
    LevelStarted { level: u32 },
    AllLevelsComplete,
    InvalidCommand { reason: GameError },
}

/// How a level was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub time_used: u32,
    /// Compacted position where the target was found
    pub matched_at: usize,
}

/// Serializable summary for front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: u32,
    pub level_description: String,
    pub remaining_secs: u32,
    pub phase: GamePhase,
    pub complete: bool,
    pub slots: Vec<Option<u8>>,
    pub target: String,
    pub search: SearchState,
    pub highlight: Vec<usize>,
    /// Slots holding the match that won the level
    pub win_highlight: Vec<usize>,
}

/// One player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    /// Run seed for reproducibility
    seed: u64,
    generator: PatternGenerator,
    level_index: u32,
    remaining_secs: u32,
    phase: GamePhase,
    slots: SlotArray,
    target: TargetPattern,
    search: SearchAnimator,
    win: Option<WinRecord>,
    events: Vec<GameEvent>,
    /// Bumped whenever a new countdown starts
    timer_generation: u64,
    /// Bumped whenever a search starts or is cancelled
    search_generation: u64,
}

impl GameSession {
    /// New session on the built-in level table
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// New session on a custom level table
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let mut session = Self {
            config,
            seed,
            generator: PatternGenerator::seeded(seed),
            level_index: 1,
            remaining_secs: 0,
            phase: GamePhase::Playing,
            slots: SlotArray::new(),
            target: TargetPattern {
                digits: Vec::new(),
                reversed: false,
            },
            search: SearchAnimator::default(),
            win: None,
            events: Vec::new(),
            timer_generation: 0,
            search_generation: 0,
        };
        session.start_level(1);
        session
    }

    fn start_level(&mut self, index: u32) {
        self.level_index = index;
        let level = self.level().clone();
        self.remaining_secs = level.time_limit_secs;
        self.slots = level.seed.build(&mut self.generator);
        self.target = self.generator.generate(&level);
        self.search.cancel();
        self.win = None;
        self.phase = GamePhase::Playing;
        self.timer_generation += 1;
        self.search_generation += 1;
        self.events.push(GameEvent::LevelStarted { level: index });
        log::info!(
            "Level {} started: {} ({}s, target {})",
            index,
            level.description,
            level.time_limit_secs,
            self.target.description()
        );
    }

    // === Commands ===

    /// Shift-insert `digit` at slot `index`, then check for a win
    pub fn insert(&mut self, index: usize, digit: u8) -> Result<(), GameError> {
        let result = self.try_insert(index, digit);
        self.report(result)
    }

    fn try_insert(&mut self, index: usize, digit: u8) -> Result<(), GameError> {
        self.ensure_playing()?;
        self.slots.insert_at(index, digit)?;
        self.events.push(GameEvent::Inserted {
            index,
            value: digit,
        });
        log::debug!("Inserted {} at {}", digit, index);
        self.check_win();
        Ok(())
    }

    /// Shift-delete the digit at slot `index`. Deleting never wins a level.
    pub fn delete(&mut self, index: usize) -> Result<u8, GameError> {
        let result = self.try_delete(index);
        self.report(result)
    }

    fn try_delete(&mut self, index: usize) -> Result<u8, GameError> {
        self.ensure_playing()?;
        let value = self.slots.delete_at(index)?;
        self.events.push(GameEvent::Deleted { index, value });
        log::debug!("Deleted {} at {}", value, index);
        Ok(value)
    }

    /// Empty the whole array
    pub fn reset(&mut self) -> Result<(), GameError> {
        let result = self.ensure_playing().map(|()| {
            self.slots.reset();
            self.events.push(GameEvent::ArrayReset);
        });
        self.report(result)
    }

    /// Start an animated search, replacing any search still running
    pub fn search(&mut self, pattern: &[u8]) -> Result<(), GameError> {
        let result = self.try_search(pattern);
        self.report(result)
    }

    /// Parse `2,1,4`-style input and start a search
    pub fn search_text(&mut self, text: &str) -> Result<(), GameError> {
        let result = parse_pattern(text).and_then(|pattern| self.try_search(&pattern));
        self.report(result)
    }

    fn try_search(&mut self, pattern: &[u8]) -> Result<(), GameError> {
        self.ensure_playing()?;
        let animator = SearchAnimator::start(self.slots.compacted(), pattern.to_vec())?;
        self.search = animator;
        self.search_generation += 1;
        self.events.push(GameEvent::SearchStarted {
            pattern: pattern.to_vec(),
        });
        self.emit_search_state();
        Ok(())
    }

    /// Advance the running search by one position
    pub fn search_step(&mut self) -> SearchState {
        if self.search.state() == SearchState::Scanning {
            self.search.step();
            self.emit_search_state();
        }
        self.search.state()
    }

    fn emit_search_state(&mut self) {
        let cursor = self.search.cursor();
        match self.search.state() {
            SearchState::Idle => {}
            SearchState::Scanning => self.events.push(GameEvent::SearchProgress { cursor }),
            SearchState::Found(index) => {
                self.events.push(GameEvent::SearchProgress { cursor });
                self.events.push(GameEvent::SearchFound { index });
                log::debug!("Search found pattern at {}", index);
            }
            SearchState::NotFound => self.events.push(GameEvent::SearchNotFound),
        }
    }

    /// Countdown tick, once per second while playing
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = GamePhase::TimedOut;
            self.events.push(GameEvent::TimedOut);
            log::info!("Level {} timed out", self.level_index);
        }
    }

    /// Move on after a win. On the last level the session stays won.
    pub fn next_level(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Won {
            return self.report(Err(GameError::LevelNotCleared));
        }
        if self.level_index < self.config.last_index() {
            self.start_level(self.level_index + 1);
        } else {
            self.events.push(GameEvent::AllLevelsComplete);
            log::info!("All {} levels complete", self.level_index);
        }
        Ok(())
    }

    /// Back to level one from any phase
    pub fn restart(&mut self) {
        log::info!("Restarting (seed {})", self.seed);
        self.start_level(1);
    }

    /// Replace the array and target on the current level
    #[cfg(test)]
    pub(crate) fn set_puzzle(&mut self, slots: SlotArray, target: TargetPattern) {
        self.slots = slots;
        self.target = target;
    }

    /// Re-run the win check against the current array
    pub fn check_win(&mut self) -> Option<usize> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let compare = self.target.compare_form();
        let matched_at = find_first(&self.slots.compacted(), &compare).ok().flatten()?;

        let time_used = self.level().time_limit_secs - self.remaining_secs;
        self.phase = GamePhase::Won;
        self.win = Some(WinRecord {
            time_used,
            matched_at,
        });
        self.events.push(GameEvent::Won { time_used });
        log::info!(
            "Level {} cracked in {}s (pattern at {})",
            self.level_index,
            time_used,
            matched_at
        );
        Some(matched_at)
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::GameNotActive);
        }
        Ok(())
    }

    /// Queue an `InvalidCommand` for failures and pass the result through
    fn report<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if let Err(err) = &result {
            log::debug!("Rejected command: {}", err);
            self.events.push(GameEvent::InvalidCommand {
                reason: err.clone(),
            });
        }
        result
    }

    /// Report a command the front end could not even parse
    pub fn reject(&mut self, err: GameError) -> Result<(), GameError> {
        self.report(Err(err))
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    pub fn level(&self) -> &Level {
        &self.config.levels[self.level_index as usize - 1]
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    pub fn level_description(&self) -> &str {
        &self.level().description
    }

    pub fn array_view(&self) -> &SlotArray {
        &self.slots
    }

    pub fn target(&self) -> &TargetPattern {
        &self.target
    }

    pub fn target_description(&self) -> String {
        self.target.description()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Last level won, nothing left to play
    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Won && self.level_index == self.config.last_index()
    }

    pub fn win_record(&self) -> Option<WinRecord> {
        self.win
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    /// Slot indices under the search window, for highlighting
    pub fn highlight_slots(&self) -> Vec<usize> {
        self.search
            .highlight()
            .filter_map(|pos| self.slots.slot_of_compact(pos))
            .collect()
    }

    /// Slot indices of the winning match, empty until the level is won
    pub fn win_slots(&self) -> Vec<usize> {
        let Some(win) = self.win else {
            return Vec::new();
        };
        let end = win.matched_at + self.target.digits.len();
        (win.matched_at..end)
            .filter_map(|pos| self.slots.slot_of_compact(pos))
            .collect()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.level_index,
            level_description: self.level_description().to_string(),
            remaining_secs: self.remaining_secs,
            phase: self.phase,
            complete: self.is_complete(),
            slots: self.slots.slots().to_vec(),
            target: self.target_description(),
            search: self.search.state(),
            highlight: self.highlight_slots(),
            win_highlight: self.win_slots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(slots: &[Option<u8>], target: &[u8], reversed: bool) -> GameSession {
        let mut session = GameSession::new(42);
        session.set_puzzle(
            SlotArray::from_slots(slots).unwrap(),
            TargetPattern::new(target.to_vec(), reversed).unwrap(),
        );
        session.drain_events();
        session
    }

    fn win_current_level(session: &mut GameSession) {
        let target = session.target().compare_form();
        let slots: Vec<Option<u8>> = target.iter().skip(1).map(|d| Some(*d)).collect();
        let reversed = session.target().reversed;
        let digits = session.target().digits.clone();
        session.set_puzzle(
            SlotArray::from_slots(&slots).unwrap(),
            TargetPattern::new(digits, reversed).unwrap(),
        );
        session.insert(0, target[0]).unwrap();
        assert_eq!(session.phase(), GamePhase::Won);
    }

    #[test]
    fn test_new_session_starts_level_one() {
        let mut session = GameSession::new(1);
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.remaining_secs(), 60);
        assert_eq!(session.array_view().compacted(), vec![3, 1, 7, 2, 1, 4, 9]);
        assert_eq!(session.target().digits.len(), 2);
        assert_eq!(session.drain_events(), vec![GameEvent::LevelStarted { level: 1 }]);
    }

    #[test]
    fn test_insert_wins_when_target_appears() {
        let mut session = session_with(&[Some(3), Some(2), Some(1), Some(9)], &[2, 1, 4], false);
        for _ in 0..5 {
            session.tick();
        }
        session.insert(3, 4).unwrap();

        assert_eq!(session.array_view().compacted(), vec![3, 2, 1, 4, 9]);
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(
            session.win_record(),
            Some(WinRecord {
                time_used: 5,
                matched_at: 1
            })
        );
        assert_eq!(
            session.drain_events(),
            vec![
                GameEvent::Inserted { index: 3, value: 4 },
                GameEvent::Won { time_used: 5 },
            ]
        );
    }

    #[test]
    fn test_win_slots_follow_gaps() {
        let mut session = session_with(&[Some(2), None, Some(1), Some(9)], &[2, 1, 4], false);
        assert!(session.win_slots().is_empty());

        session.insert(3, 4).unwrap();
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(session.win_record().map(|w| w.matched_at), Some(0));
        assert_eq!(session.win_slots(), vec![0, 2, 3]);
        assert_eq!(session.snapshot().win_highlight, vec![0, 2, 3]);
        // The search window is separate from the win
        assert!(session.snapshot().highlight.is_empty());
    }

    #[test]
    fn test_reversed_level_matches_compare_form() {
        let mut session = session_with(&[Some(5), Some(3)], &[5, 6], true);
        assert_eq!(session.target_description(), "[6, 5] (reverse)");

        session.insert(0, 6).unwrap();
        assert_eq!(session.array_view().compacted(), vec![6, 5, 3]);
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(session.win_record().map(|w| w.matched_at), Some(0));
        assert_eq!(session.win_slots(), vec![0, 1]);
    }

    #[test]
    fn test_literal_order_does_not_win_reversed_level() {
        let mut session = session_with(&[Some(6), Some(3)], &[5, 6], true);
        session.insert(0, 5).unwrap();
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_delete_never_triggers_win() {
        // Deleting the 7 leaves [2, 1, 4] in place but only inserts check
        let mut session = session_with(&[Some(2), Some(7), Some(1), Some(4)], &[2, 1, 4], false);
        assert_eq!(session.delete(1), Ok(7));
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.check_win(), Some(0));
        assert_eq!(session.phase(), GamePhase::Won);
    }

    #[test]
    fn test_timer_runs_out_once() {
        let mut session = GameSession::new(3);
        session.drain_events();
        for _ in 0..59 {
            session.tick();
        }
        assert_eq!(session.remaining_secs(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);

        session.tick();
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.phase(), GamePhase::TimedOut);

        session.tick();
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.phase(), GamePhase::TimedOut);
        assert_eq!(session.drain_events(), vec![GameEvent::TimedOut]);
    }

    #[test]
    fn test_commands_rejected_when_not_playing() {
        let mut session = GameSession::new(3);
        for _ in 0..60 {
            session.tick();
        }
        session.drain_events();
        let before = session.array_view().clone();

        assert_eq!(session.insert(0, 1), Err(GameError::GameNotActive));
        assert_eq!(session.delete(0), Err(GameError::GameNotActive));
        assert_eq!(session.reset(), Err(GameError::GameNotActive));
        assert_eq!(session.search(&[1]), Err(GameError::GameNotActive));
        assert_eq!(session.array_view(), &before);

        let events = session.drain_events();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| *e
            == GameEvent::InvalidCommand {
                reason: GameError::GameNotActive
            }));
    }

    #[test]
    fn test_failed_insert_leaves_state_unchanged() {
        let mut session = GameSession::new(8);
        session.drain_events();
        let before = session.array_view().clone();
        assert!(matches!(
            session.insert(10, 1),
            Err(GameError::IndexOutOfRange { .. })
        ));
        assert_eq!(session.insert(0, 12), Err(GameError::InvalidDigit(12)));
        assert_eq!(session.delete(3), Err(GameError::EmptySlot(3)));
        assert_eq!(session.array_view(), &before);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_next_level_requires_win() {
        let mut session = GameSession::new(5);
        assert_eq!(session.next_level(), Err(GameError::LevelNotCleared));
        assert_eq!(session.level_index(), 1);
    }

    #[test]
    fn test_next_level_advances_and_resets() {
        let mut session = GameSession::new(5);
        let timer_before = session.timer_generation();
        win_current_level(&mut session);
        session.drain_events();

        session.next_level().unwrap();
        assert_eq!(session.level_index(), 2);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.remaining_secs(), 45);
        assert_eq!(session.target().digits.len(), 3);
        assert_eq!(session.array_view().occupied(), 3);
        assert!(session.win_record().is_none());
        assert!(session.timer_generation() > timer_before);
        assert_eq!(session.drain_events(), vec![GameEvent::LevelStarted { level: 2 }]);
    }

    #[test]
    fn test_last_level_win_is_terminal() {
        let mut session = GameSession::new(11);
        for _ in 0..2 {
            win_current_level(&mut session);
            session.next_level().unwrap();
        }
        assert_eq!(session.level_index(), 3);
        assert!(session.target().reversed);

        win_current_level(&mut session);
        assert!(session.is_complete());
        session.drain_events();

        session.next_level().unwrap();
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(session.level_index(), 3);
        assert!(session.is_complete());
        assert_eq!(session.drain_events(), vec![GameEvent::AllLevelsComplete]);
        assert_eq!(session.insert(0, 1), Err(GameError::GameNotActive));
    }

    #[test]
    fn test_restart_from_any_phase() {
        let mut session = GameSession::new(21);
        win_current_level(&mut session);
        session.next_level().unwrap();
        for _ in 0..45 {
            session.tick();
        }
        assert_eq!(session.phase(), GamePhase::TimedOut);

        session.restart();
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.remaining_secs(), 60);
        assert_eq!(session.array_view().compacted(), vec![3, 1, 7, 2, 1, 4, 9]);
    }

    #[test]
    fn test_search_walks_compacted_view() {
        let mut session = session_with(
            &[Some(3), Some(1), Some(7), None, Some(2), Some(1), Some(4), Some(9)],
            &[8, 8],
            false,
        );
        session.search_text("2,1,4").unwrap();
        assert_eq!(session.search_state(), SearchState::Scanning);
        assert_eq!(session.highlight_slots(), vec![0, 1, 2]);

        session.search_step();
        session.search_step();
        assert_eq!(session.search_step(), SearchState::Found(3));
        assert_eq!(session.highlight_slots(), vec![4, 5, 6]);
        // Search results never change the level outcome
        assert_eq!(session.phase(), GamePhase::Playing);

        assert_eq!(
            session.drain_events(),
            vec![
                GameEvent::SearchStarted {
                    pattern: vec![2, 1, 4]
                },
                GameEvent::SearchProgress { cursor: 0 },
                GameEvent::SearchProgress { cursor: 1 },
                GameEvent::SearchProgress { cursor: 2 },
                GameEvent::SearchProgress { cursor: 3 },
                GameEvent::SearchFound { index: 3 },
            ]
        );
    }

    #[test]
    fn test_new_search_cancels_running_one() {
        let mut session = session_with(&[Some(1), Some(2), Some(3), Some(4)], &[8, 8], false);
        session.search(&[3, 4]).unwrap();
        let first_generation = session.search_generation();
        session.search(&[9]).unwrap();
        assert!(session.search_generation() > first_generation);
        session.drain_events();

        while session.search_step() == SearchState::Scanning {}
        let events = session.drain_events();
        assert!(!events.contains(&GameEvent::SearchFound { index: 2 }));
        assert_eq!(events.last(), Some(&GameEvent::SearchNotFound));
    }

    #[test]
    fn test_restart_cancels_running_search() {
        let mut session = session_with(&[Some(1), Some(2), Some(3), Some(4)], &[8, 8], false);
        session.search(&[3, 4]).unwrap();
        assert_eq!(session.search_state(), SearchState::Scanning);
        let generation = session.search_generation();

        session.restart();
        assert_eq!(session.search_state(), SearchState::Idle);
        assert!(session.search_generation() > generation);
        assert!(session.highlight_slots().is_empty());
        session.drain_events();

        for _ in 0..5 {
            assert_eq!(session.search_step(), SearchState::Idle);
        }
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_next_level_cancels_running_search() {
        let mut session = session_with(&[Some(2), Some(9), Some(9), Some(9)], &[1, 2], false);
        session.search(&[9, 9, 9]).unwrap();
        assert_eq!(session.search_state(), SearchState::Scanning);

        // A search in flight keeps running across the win
        session.insert(0, 1).unwrap();
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(session.search_state(), SearchState::Scanning);

        session.next_level().unwrap();
        assert_eq!(session.level_index(), 2);
        assert_eq!(session.search_state(), SearchState::Idle);
        session.drain_events();

        for _ in 0..5 {
            session.search_step();
        }
        let events = session.drain_events();
        assert!(!events.iter().any(|e| matches!(
            e,
            GameEvent::SearchProgress { .. } | GameEvent::SearchFound { .. }
        )));
    }

    #[test]
    fn test_search_rejects_bad_pattern() {
        let mut session = GameSession::new(2);
        session.drain_events();
        assert!(matches!(
            session.search_text("1,x"),
            Err(GameError::InvalidPattern(_))
        ));
        assert!(matches!(session.search(&[]), Err(GameError::InvalidPattern(_))));
        assert_eq!(session.search_state(), SearchState::Idle);
        assert_eq!(session.drain_events().len(), 2);
    }

    #[test]
    fn test_reject_queues_invalid_command() {
        let mut session = GameSession::new(2);
        session.drain_events();
        let err = GameError::UnknownCommand("jump".into());
        assert_eq!(session.reject(err.clone()), Err(err.clone()));
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::InvalidCommand { reason: err }]
        );
    }

    #[test]
    fn test_reset_empties_array() {
        let mut session = GameSession::new(2);
        session.reset().unwrap();
        assert_eq!(session.array_view().occupied(), 0);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = GameSession::new(4);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.slots.len(), 10);
        assert!(!snapshot.complete);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = GameConfig::default();
        config.levels.clear();
        assert!(GameSession::with_config(config, 1).is_err());

        let mut config = GameConfig::default();
        config.levels.truncate(1);
        let mut session = GameSession::with_config(config, 1).unwrap();
        win_current_level(&mut session);
        assert!(session.is_complete());
    }

    #[test]
    fn test_same_seed_same_targets() {
        let a = GameSession::new(777);
        let b = GameSession::new(777);
        assert_eq!(a.target(), b.target());
    }
}
