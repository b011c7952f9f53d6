//! Step-by-step pattern search
//!
//! The animator walks a snapshot of the compacted array one position per
//! step so the front end can highlight each window as it is compared. It
//! never touches the slot array itself.

use serde::{Deserialize, Serialize};

use super::pattern::matches_at;
use crate::error::GameError;

/// Animator progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchState {
    /// No search running
    Idle,
    /// Comparing the window at the cursor
    Scanning,
    /// Match starting at this compacted position
    Found(usize),
    NotFound,
}

/// One user-initiated search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAnimator {
    haystack: Vec<u8>,
    needle: Vec<u8>,
    cursor: usize,
    state: SearchState,
}

impl Default for SearchAnimator {
    fn default() -> Self {
        Self {
            haystack: Vec::new(),
            needle: Vec::new(),
            cursor: 0,
            state: SearchState::Idle,
        }
    }
}

impl SearchAnimator {
    /// Begin searching `haystack` for `needle`, comparing the first window
    pub fn start(haystack: Vec<u8>, needle: Vec<u8>) -> Result<Self, GameError> {
        if needle.is_empty() {
            return Err(GameError::InvalidPattern("pattern cannot be empty".into()));
        }
        let mut animator = Self {
            haystack,
            needle,
            cursor: 0,
            state: SearchState::Scanning,
        };
        animator.compare();
        Ok(animator)
    }

    /// Advance one position. No-op unless scanning.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Scanning {
            return self.state;
        }
        self.cursor += 1;
        self.compare();
        self.state
    }

    /// Drop the search without reporting anything
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    fn compare(&mut self) {
        if self.cursor + self.needle.len() > self.haystack.len() {
            self.state = SearchState::NotFound;
        } else if matches_at(&self.haystack, &self.needle, self.cursor) {
            self.state = SearchState::Found(self.cursor);
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Compacted positions under the current window (clipped to the haystack)
    pub fn highlight(&self) -> std::ops::Range<usize> {
        match self.state {
            SearchState::Idle | SearchState::NotFound => 0..0,
            SearchState::Scanning | SearchState::Found(_) => {
                let end = (self.cursor + self.needle.len()).min(self.haystack.len());
                self.cursor.min(end)..end
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_after_three_steps() {
        let mut search = SearchAnimator::start(vec![3, 1, 7, 2, 1, 4, 9], vec![2, 1, 4]).unwrap();
        assert_eq!(search.state(), SearchState::Scanning);
        assert_eq!(search.step(), SearchState::Scanning);
        assert_eq!(search.step(), SearchState::Scanning);
        assert_eq!(search.step(), SearchState::Found(3));
        assert_eq!(search.highlight(), 3..6);

        // Further steps change nothing
        assert_eq!(search.step(), SearchState::Found(3));
        assert_eq!(search.cursor(), 3);
    }

    #[test]
    fn test_match_at_start_needs_no_steps() {
        let search = SearchAnimator::start(vec![2, 1, 4], vec![2, 1]).unwrap();
        assert_eq!(search.state(), SearchState::Found(0));
    }

    #[test]
    fn test_not_found_after_last_window() {
        let mut search = SearchAnimator::start(vec![1, 2, 3, 4], vec![4, 3]).unwrap();
        // Windows at 0, 1, 2 exist; the step past 2 finishes the scan
        assert_eq!(search.step(), SearchState::Scanning);
        assert_eq!(search.step(), SearchState::Scanning);
        assert_eq!(search.step(), SearchState::NotFound);
        assert_eq!(search.highlight(), 0..0);
    }

    #[test]
    fn test_short_haystack_is_immediately_not_found() {
        let search = SearchAnimator::start(vec![1], vec![1, 2]).unwrap();
        assert_eq!(search.state(), SearchState::NotFound);
        let search = SearchAnimator::start(Vec::new(), vec![0]).unwrap();
        assert_eq!(search.state(), SearchState::NotFound);
    }

    #[test]
    fn test_empty_needle_rejected() {
        assert!(matches!(
            SearchAnimator::start(vec![1, 2], Vec::new()),
            Err(GameError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut search = SearchAnimator::start(vec![5, 5, 5, 1], vec![1]).unwrap();
        search.step();
        search.cancel();
        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(search.step(), SearchState::Idle);
    }
}
