//! Dice formulas for generating ability scores.
//!
//! Two formulas cover every random generation method: 3d6 summed, and 4d6
//! with the lowest die dropped. Rolling borrows a caller-owned RNG so runs
//! are reproducible under a fixed seed.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A dice formula that produces a single ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceFormula {
    /// Three six-sided dice, summed.
    ThreeD6,
    /// Four six-sided dice, lowest dropped, remaining three summed.
    FourD6DropLowest,
}

impl DiceFormula {
    /// Number of dice rolled, before any are dropped.
    pub fn dice_rolled(self) -> usize {
        match self {
            DiceFormula::ThreeD6 => 3,
            DiceFormula::FourD6DropLowest => 4,
        }
    }

    /// Number of dice that count toward the total.
    pub fn dice_kept(self) -> usize {
        3
    }

    /// Smallest possible total.
    pub fn min_total(self) -> i32 {
        3
    }

    /// Largest possible total.
    pub fn max_total(self) -> i32 {
        18
    }

    /// Wire spelling understood by host dice engines.
    pub fn as_str(self) -> &'static str {
        match self {
            DiceFormula::ThreeD6 => "3d6",
            DiceFormula::FourD6DropLowest => "4d6dl",
        }
    }

    /// Parse a wire spelling. Accepts both the drop-lowest and
    /// keep-highest notations for the 4d6 formula.
    pub fn parse(text: &str) -> Option<DiceFormula> {
        match text.trim().to_lowercase().as_str() {
            "3d6" => Some(DiceFormula::ThreeD6),
            "4d6dl" | "4d6kh3" => Some(DiceFormula::FourD6DropLowest),
            _ => None,
        }
    }

    /// Roll the formula with the given RNG.
    pub fn roll(self, rng: &mut StdRng) -> RollOutcome {
        let mut dice: Vec<u32> = (0..self.dice_rolled())
            .map(|_| rng.random_range(1..=6))
            .collect();
        let dropped = match self {
            DiceFormula::ThreeD6 => None,
            DiceFormula::FourD6DropLowest => {
                let lowest = dice
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, value)| **value)
                    .map(|(index, _)| index);
                lowest.map(|index| dice.remove(index))
            }
        };
        RollOutcome {
            formula: self,
            kept: dice,
            dropped,
        }
    }
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kept and dropped dice for one generated score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The formula that produced this outcome.
    pub formula: DiceFormula,
    /// Kept die values, in the order rolled.
    pub kept: Vec<u32>,
    /// The dropped die, if the formula drops one.
    pub dropped: Option<u32>,
}

impl RollOutcome {
    /// Sum of the kept dice.
    pub fn total(&self) -> i32 {
        self.kept.iter().sum::<u32>() as i32
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kept = self
            .kept
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{kept}] = {}", self.total())?;
        if let Some(dropped) = self.dropped {
            write!(f, " (dropped {dropped})")?;
        }
        Ok(())
    }
}
