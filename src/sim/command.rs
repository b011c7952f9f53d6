//! Player commands
//!
//! A single command type shared by every front end, with a small text syntax
//! for terminal play:
//!
//! ```text
//! insert <index> <digit>    delete <index>    search 2,1,4
//! reset    next    restart    tick    step
//! ```

use super::pattern::parse_pattern;
use super::state::GameSession;
use crate::consts::{CAPACITY, MAX_DIGIT};
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { index: usize, digit: u8 },
    Delete { index: usize },
    Search(Vec<u8>),
    Reset,
    NextLevel,
    Restart,
    Tick,
    SearchStep,
}

impl Command {
    /// Parse one line of terminal input
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(GameError::UnknownCommand(String::new()));
        };
        let rest: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), rest.as_slice()) {
            ("insert" | "i", [index, digit]) => Command::Insert {
                index: parse_index(index)?,
                digit: parse_digit(digit)?,
            },
            ("delete" | "d", [index]) => Command::Delete {
                index: parse_index(index)?,
            },
            ("search" | "s", [_, ..]) => Command::Search(parse_pattern(&join_pattern(&rest))?),
            ("search" | "s", []) => {
                return Err(GameError::InvalidPattern(
                    "enter a pattern to search, e.g. 2,1,4".into(),
                ));
            }
            ("reset" | "r", []) => Command::Reset,
            ("next" | "n", []) => Command::NextLevel,
            ("restart", []) => Command::Restart,
            ("tick" | "t", []) => Command::Tick,
            ("step", []) => Command::SearchStep,
            _ => return Err(GameError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

/// `search 2 1 4` and `search 2, 1, 4` both mean `2,1,4`
fn join_pattern(words: &[&str]) -> String {
    if words.iter().any(|w| w.contains(',')) {
        words.concat()
    } else {
        words.join(",")
    }
}

fn parse_number(text: &str) -> Result<i64, GameError> {
    text.parse().map_err(|_| GameError::NotANumber(text.to_string()))
}

/// Index argument; negative values are out of range
fn parse_index(text: &str) -> Result<usize, GameError> {
    let value = parse_number(text)?;
    usize::try_from(value)
        .ok()
        .filter(|i| *i < CAPACITY)
        .ok_or(GameError::IndexOutOfRange {
            index: value,
            capacity: CAPACITY,
        })
}

fn parse_digit(text: &str) -> Result<u8, GameError> {
    let value = parse_number(text)?;
    u8::try_from(value)
        .ok()
        .filter(|d| *d <= MAX_DIGIT)
        .ok_or(GameError::InvalidDigit(value))
}

impl GameSession {
    /// Dispatch a command
    pub fn apply(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Insert { index, digit } => self.insert(index, digit),
            Command::Delete { index } => self.delete(index).map(|_| ()),
            Command::Search(pattern) => self.search(&pattern),
            Command::Reset => self.reset(),
            Command::NextLevel => self.next_level(),
            Command::Restart => {
                self.restart();
                Ok(())
            }
            Command::Tick => {
                self.tick();
                Ok(())
            }
            Command::SearchStep => {
                self.search_step();
                Ok(())
            }
        }
    }
}
