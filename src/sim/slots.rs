//! Fixed-capacity slot array
//!
//! The playing field: `CAPACITY` slots, each empty or holding one digit.
//! Inserting shifts everything right (the last slot falls off the end),
//! deleting shifts everything left (the last slot becomes empty).

use serde::{Deserialize, Serialize};

use crate::consts::{CAPACITY, MAX_DIGIT};
use crate::error::GameError;

/// Ordered slots of optional digits
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotArray {
    slots: [Option<u8>; CAPACITY],
}

impl SlotArray {
    /// All slots empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit slot contents. Missing trailing slots are empty.
    pub fn from_slots(values: &[Option<u8>]) -> Result<Self, GameError> {
        if values.len() > CAPACITY {
            return Err(GameError::IndexOutOfRange {
                index: values.len() as i64 - 1,
                capacity: CAPACITY,
            });
        }
        let mut array = Self::new();
        for (slot, value) in array.slots.iter_mut().zip(values) {
            if let Some(digit) = *value {
                check_digit(digit)?;
            }
            *slot = *value;
        }
        Ok(array)
    }

    /// Raw slot contents, in order
    pub fn slots(&self) -> &[Option<u8>; CAPACITY] {
        &self.slots
    }

    /// Digit at a slot (`None` when empty or out of range)
    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() >= CAPACITY
    }

    /// Shift-insert `digit` at `index`
    pub fn insert_at(&mut self, index: usize, digit: u8) -> Result<(), GameError> {
        check_index(index)?;
        check_digit(digit)?;
        if self.is_full() {
            return Err(GameError::ArrayFull);
        }

        // Last slot's content drops off the end
        for i in (index + 1..CAPACITY).rev() {
            self.slots[i] = self.slots[i - 1];
        }
        self.slots[index] = Some(digit);
        Ok(())
    }

    /// Shift-delete the digit at `index`, returning it
    pub fn delete_at(&mut self, index: usize) -> Result<u8, GameError> {
        check_index(index)?;
        let removed = self.slots[index].ok_or(GameError::EmptySlot(index))?;

        for i in index..CAPACITY - 1 {
            self.slots[i] = self.slots[i + 1];
        }
        self.slots[CAPACITY - 1] = None;
        Ok(removed)
    }

    /// Occupied digits in slot order, empties skipped
    pub fn compacted(&self) -> Vec<u8> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Slot index holding the `position`-th occupied digit
    pub fn slot_of_compact(&self, position: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .nth(position)
            .map(|(i, _)| i)
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        self.slots = [None; CAPACITY];
    }
}

fn check_index(index: usize) -> Result<(), GameError> {
    if index >= CAPACITY {
        return Err(GameError::IndexOutOfRange {
            index: index as i64,
            capacity: CAPACITY,
        });
    }
    Ok(())
}

pub(crate) fn check_digit(digit: u8) -> Result<(), GameError> {
    if digit > MAX_DIGIT {
        return Err(GameError::InvalidDigit(digit as i64));
    }
    Ok(())
}
