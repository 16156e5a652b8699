//! Ability-score rules for Scoreforge.
//!
//! Provides the six ability keys, score containers, generation methods,
//! dice formulas, the point-buy cost table, and bonus-preserving
//! reconciliation. Everything here is pure rules: no I/O, no owned RNG.
//! Rolling borrows a caller-owned `StdRng` so runs are reproducible.

pub mod ability;
pub mod dice;
pub mod method;
pub mod point_buy;
pub mod reconcile;
pub mod scores;

pub use ability::AbilityKey;
pub use dice::{DiceFormula, RollOutcome};
pub use method::{GenerationMethod, STANDARD_ARRAY};
pub use scores::{AbilityScores, Assignments};
