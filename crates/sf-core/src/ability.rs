//! The six ability keys and their canonical ordering.

use serde::{Deserialize, Serialize};

/// One of the six character abilities.
///
/// Order matters: the down-the-line rolling method fills abilities in
/// [`AbilityKey::ALL`] order, and slot views render in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKey {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Constitution.
    Con,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl AbilityKey {
    /// All ability keys in canonical order.
    pub const ALL: [AbilityKey; 6] = [
        AbilityKey::Str,
        AbilityKey::Dex,
        AbilityKey::Con,
        AbilityKey::Int,
        AbilityKey::Wis,
        AbilityKey::Cha,
    ];

    /// Position of this key in canonical order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// The key at a canonical-order position, if the position is in range.
    pub fn from_index(index: usize) -> Option<AbilityKey> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase abbreviation used in stored flags and drag payloads.
    pub fn abbr(self) -> &'static str {
        match self {
            AbilityKey::Str => "str",
            AbilityKey::Dex => "dex",
            AbilityKey::Con => "con",
            AbilityKey::Int => "int",
            AbilityKey::Wis => "wis",
            AbilityKey::Cha => "cha",
        }
    }

    /// Full display name.
    pub fn label(self) -> &'static str {
        match self {
            AbilityKey::Str => "Strength",
            AbilityKey::Dex => "Dexterity",
            AbilityKey::Con => "Constitution",
            AbilityKey::Int => "Intelligence",
            AbilityKey::Wis => "Wisdom",
            AbilityKey::Cha => "Charisma",
        }
    }

    /// Parse a key from its abbreviation or full name, case-insensitive.
    pub fn parse(name: &str) -> Option<AbilityKey> {
        match name.trim().to_lowercase().as_str() {
            "str" | "strength" => Some(AbilityKey::Str),
            "dex" | "dexterity" => Some(AbilityKey::Dex),
            "con" | "constitution" => Some(AbilityKey::Con),
            "int" | "intelligence" => Some(AbilityKey::Int),
            "wis" | "wisdom" => Some(AbilityKey::Wis),
            "cha" | "charisma" => Some(AbilityKey::Cha),
            _ => None,
        }
    }
}

impl std::fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityKey::Str => write!(f, "STR"),
            AbilityKey::Dex => write!(f, "DEX"),
            AbilityKey::Con => write!(f, "CON"),
            AbilityKey::Int => write!(f, "INT"),
            AbilityKey::Wis => write!(f, "WIS"),
            AbilityKey::Cha => write!(f, "CHA"),
        }
    }
}
