//! Point-buy cost table and budget math.
//!
//! Every score starts at the floor of 8 and may be raised to 15. Raising
//! costs points from a budget of 27: one point per step up to 13, then a
//! premium for the top two values. Cost is a function of the value held,
//! not of the step taken, so refunds on the way down are automatic.

use crate::scores::Assignments;

/// Total points available to spend.
pub const BUDGET: u32 = 27;

/// Lowest purchasable score.
pub const FLOOR: i32 = 8;

/// Highest purchasable score.
pub const CEILING: i32 = 15;

/// Cumulative cost of holding a score at `value`.
///
/// Values outside the purchasable band cost nothing here; keeping values
/// inside the band is the session's job.
pub fn point_cost(value: i32) -> u32 {
    match value {
        8..=13 => (value - 8) as u32,
        14 => 7,
        15 => 9,
        _ => 0,
    }
}

/// Combined cost of every assigned value.
pub fn total_cost(assignments: &Assignments) -> u32 {
    assignments
        .iter()
        .filter_map(|(_, value)| value)
        .map(point_cost)
        .sum()
}

/// Points left to spend after the given assignments.
pub fn points_remaining(assignments: &Assignments) -> u32 {
    BUDGET.saturating_sub(total_cost(assignments))
}

/// True if `value` lies inside the purchasable band.
pub fn in_band(value: i32) -> bool {
    (FLOOR..=CEILING).contains(&value)
}
