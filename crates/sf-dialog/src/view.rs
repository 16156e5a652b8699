//! Presentation data derived from a session.
//!
//! [`SessionView`] is a render-ready snapshot: hosts draw it directly
//! without reaching back into the session. Everything in it is computed,
//! nothing is authoritative.

use serde::Serialize;

use sf_core::{AbilityKey, GenerationMethod, point_buy};

use crate::pool::RollId;
use crate::session::{RollerSession, SessionStep};

/// One ability slot as the dialog renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Which ability this slot is.
    pub key: AbilityKey,
    /// Display label for the slot header.
    pub label: &'static str,
    /// Assigned value, if any.
    pub value: Option<i32>,
    /// Id of the rolled value claiming this slot, if any.
    pub roll_id: Option<RollId>,
}

/// An unassigned value chip waiting in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolChip {
    /// Drag reference id.
    pub id: RollId,
    /// Score shown on the chip.
    pub value: i32,
}

/// Everything a host needs to render one frame of the dialog.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Active generation method.
    pub method: GenerationMethod,
    /// Short method name for the title bar.
    pub method_name: &'static str,
    /// One-line instruction under the title.
    pub method_description: &'static str,
    /// Current step.
    pub step: SessionStep,
    /// True for the down-the-line method.
    pub in_order: bool,
    /// True for the standard-array method.
    pub standard_array: bool,
    /// Rolls made so far. Zero for the non-rolling methods.
    pub rolls_attempted: usize,
    /// Rolls still to make. Zero for the non-rolling methods.
    pub rolls_remaining: usize,
    /// Label of the slot the next down-the-line roll will fill.
    pub next_slot_label: Option<&'static str>,
    /// Unassigned chips in generation order.
    pub pool: Vec<PoolChip>,
    /// The six ability slots in canonical order.
    pub slots: [SlotView; 6],
    /// Points spent so far. Zero outside point buy.
    pub points_spent: u32,
    /// Points still available. Zero outside point buy.
    pub points_remaining: u32,
    /// True once confirm may proceed.
    pub can_confirm: bool,
    /// True while a roll is in flight, for the waiting state.
    pub roll_in_flight: bool,
}

impl SessionView {
    /// Derive the view of a session.
    pub fn of(session: &RollerSession) -> Self {
        let method = session.method();
        let pool_len = session.pool().len();
        let (rolls_attempted, rolls_remaining) = if method.is_random() {
            (pool_len, crate::pool::RollPool::CAPACITY - pool_len)
        } else {
            (0, 0)
        };
        let next_slot_label = if method.is_in_order() {
            AbilityKey::from_index(pool_len).map(AbilityKey::label)
        } else {
            None
        };
        let pool = session
            .pool()
            .unassigned()
            .map(|v| PoolChip {
                id: v.id,
                value: v.value,
            })
            .collect();
        let slots = AbilityKey::ALL.map(|key| SlotView {
            key,
            label: key.label(),
            value: session.assignments().get(key),
            roll_id: session.pool().claimant(key).map(|v| v.id),
        });
        let (points_spent, points_remaining) = if session.step() == SessionStep::PointBuy {
            (
                point_buy::total_cost(session.assignments()),
                point_buy::points_remaining(session.assignments()),
            )
        } else {
            (0, 0)
        };

        Self {
            method,
            method_name: method.name(),
            method_description: method.description(),
            step: session.step(),
            in_order: method.is_in_order(),
            standard_array: method == GenerationMethod::StandardArray,
            rolls_attempted,
            rolls_remaining,
            next_slot_label,
            pool,
            slots,
            points_spent,
            points_remaining,
            can_confirm: session.can_confirm(),
            roll_in_flight: session.roll_in_flight(),
        }
    }
}
