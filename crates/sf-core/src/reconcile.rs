//! Bonus-preserving reconciliation between chosen bases and live totals.
//!
//! A character's live totals may include modifiers applied outside this
//! crate (ancestry bonuses, items, effects). The base values stored at the
//! last confirm let those ride along: the carried bonus on an ability is
//! `current total - stored base`, and a newly chosen base lands as
//! `new base + carried bonus`. An ability never confirmed before is
//! treated as having the default base.

use crate::ability::AbilityKey;
use crate::scores::{AbilityScores, Assignments};

/// Base value assumed for an ability with no stored assignment.
pub const DEFAULT_BASE: i32 = 10;

/// The externally applied bonus riding on one ability.
pub fn carried_bonus(current_total: i32, stored_base: Option<i32>) -> i32 {
    current_total - stored_base.unwrap_or(DEFAULT_BASE)
}

/// Merge newly chosen bases into live totals, preserving carried bonuses.
pub fn apply_bases(
    new_bases: &AbilityScores,
    current: &AbilityScores,
    stored: &Assignments,
) -> AbilityScores {
    let mut out = AbilityScores::uniform(0);
    for key in AbilityKey::ALL {
        let bonus = carried_bonus(current.get(key), stored.get(key));
        out.set(key, new_bases.get(key) + bonus);
    }
    out
}

/// Totals after a reset: every base returns to the default, bonuses stay.
pub fn reset_totals(current: &AbilityScores, stored: &Assignments) -> AbilityScores {
    apply_bases(&AbilityScores::uniform(DEFAULT_BASE), current, stored)
}
