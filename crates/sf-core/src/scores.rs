//! Score containers: complete ability totals and partial assignments.

use serde::{Deserialize, Serialize};

use crate::ability::AbilityKey;

/// A complete set of six ability scores, indexed by [`AbilityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    values: [i32; 6],
}

impl AbilityScores {
    /// Create a set with every ability at the same value.
    pub fn uniform(value: i32) -> Self {
        Self { values: [value; 6] }
    }

    /// Create a set from values in canonical ability order.
    pub fn from_array(values: [i32; 6]) -> Self {
        Self { values }
    }

    /// The score for a key.
    pub fn get(&self, key: AbilityKey) -> i32 {
        self.values[key.index()]
    }

    /// Overwrite the score for a key.
    pub fn set(&mut self, key: AbilityKey, value: i32) {
        self.values[key.index()] = value;
    }

    /// Iterate `(key, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityKey, i32)> + '_ {
        AbilityKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl std::fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key} {value}")?;
            first = false;
        }
        Ok(())
    }
}

/// A partial mapping from abilities to chosen base values.
///
/// `None` means the ability has not been assigned yet. A complete set of
/// assignments converts into [`AbilityScores`] via [`Assignments::complete`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignments {
    values: [Option<i32>; 6],
}

impl Assignments {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping with every ability assigned the same value.
    pub fn uniform(value: i32) -> Self {
        Self { values: [Some(value); 6] }
    }

    /// The assigned value for a key, if any.
    pub fn get(&self, key: AbilityKey) -> Option<i32> {
        self.values[key.index()]
    }

    /// Assign or clear the value for a key.
    pub fn set(&mut self, key: AbilityKey, value: Option<i32>) {
        self.values[key.index()] = value;
    }

    /// Number of abilities with an assigned value.
    pub fn assigned_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True once every ability has a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_some())
    }

    /// The full score set, if every ability has a value.
    pub fn complete(&self) -> Option<AbilityScores> {
        let mut out = [0; 6];
        for (slot, value) in out.iter_mut().zip(self.values) {
            *slot = value?;
        }
        Some(AbilityScores::from_array(out))
    }

    /// Iterate `(key, assigned value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityKey, Option<i32>)> + '_ {
        AbilityKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}
