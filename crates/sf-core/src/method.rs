//! Ability-score generation methods.

use serde::{Deserialize, Serialize};

use crate::dice::DiceFormula;

/// The fixed value set assigned by the standard-array method.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// How a character's six ability scores are generated.
///
/// Serializes as the same identifier the world-settings store uses, so a
/// method embedded in a view or config round-trips against stored
/// settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMethod {
    /// Roll 4d6 dropping the lowest, six times, then assign freely.
    #[default]
    #[serde(rename = "4d6kh3")]
    FourD6DropLowest,
    /// Roll 3d6, six times, then assign freely.
    #[serde(rename = "3d6")]
    ThreeD6,
    /// Roll 3d6 six times, each result locked to the next ability in order.
    #[serde(rename = "3d6InOrder")]
    ThreeD6InOrder,
    /// Distribute the fixed array 15, 14, 13, 12, 10, 8 freely.
    #[serde(rename = "standardArray")]
    StandardArray,
    /// Spend a budget of points raising scores from a floor of 8.
    #[serde(rename = "pointBuy")]
    PointBuy,
}

impl GenerationMethod {
    /// All methods, in the order they are offered to world hosts.
    pub const ALL: [GenerationMethod; 5] = [
        GenerationMethod::FourD6DropLowest,
        GenerationMethod::ThreeD6,
        GenerationMethod::ThreeD6InOrder,
        GenerationMethod::StandardArray,
        GenerationMethod::PointBuy,
    ];

    /// Identifier under which this method is stored in world settings.
    pub fn setting_id(self) -> &'static str {
        match self {
            GenerationMethod::FourD6DropLowest => "4d6kh3",
            GenerationMethod::ThreeD6 => "3d6",
            GenerationMethod::ThreeD6InOrder => "3d6InOrder",
            GenerationMethod::StandardArray => "standardArray",
            GenerationMethod::PointBuy => "pointBuy",
        }
    }

    /// Parse a stored settings identifier, case-insensitive. Unknown
    /// identifiers yield `None` so callers can fall back to the default.
    pub fn from_setting(id: &str) -> Option<GenerationMethod> {
        match id.trim().to_lowercase().as_str() {
            "4d6kh3" => Some(GenerationMethod::FourD6DropLowest),
            "3d6" => Some(GenerationMethod::ThreeD6),
            "3d6inorder" => Some(GenerationMethod::ThreeD6InOrder),
            "standardarray" => Some(GenerationMethod::StandardArray),
            "pointbuy" => Some(GenerationMethod::PointBuy),
            _ => None,
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            GenerationMethod::FourD6DropLowest => "4d6 Drop Lowest",
            GenerationMethod::ThreeD6 => "3d6",
            GenerationMethod::ThreeD6InOrder => "3d6 Down the Line",
            GenerationMethod::StandardArray => "Standard Array",
            GenerationMethod::PointBuy => "Point Buy",
        }
    }

    /// One-line instruction shown at the top of the dialog.
    pub fn description(self) -> &'static str {
        match self {
            GenerationMethod::FourD6DropLowest => {
                "Roll 4d6 (drop lowest) for your ability scores!"
            }
            GenerationMethod::ThreeD6 => "Roll 3d6 for your ability scores.",
            GenerationMethod::ThreeD6InOrder => "Roll 3d6, assigning the results in order!",
            GenerationMethod::StandardArray => {
                "Assign the standard array (15, 14, 13, 12, 10, 8) to your ability scores."
            }
            GenerationMethod::PointBuy => "Spend 27 points to customize your ability scores.",
        }
    }

    /// The dice formula behind this method, for the rolling methods.
    pub fn formula(self) -> Option<DiceFormula> {
        match self {
            GenerationMethod::FourD6DropLowest => Some(DiceFormula::FourD6DropLowest),
            GenerationMethod::ThreeD6 | GenerationMethod::ThreeD6InOrder => {
                Some(DiceFormula::ThreeD6)
            }
            GenerationMethod::StandardArray | GenerationMethod::PointBuy => None,
        }
    }

    /// True for the three dice-rolling methods.
    pub fn is_random(self) -> bool {
        self.formula().is_some()
    }

    /// True when each roll locks to the next ability in canonical order.
    pub fn is_in_order(self) -> bool {
        self == GenerationMethod::ThreeD6InOrder
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
