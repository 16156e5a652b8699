//! The assignment state machine for one dialog session.
//!
//! `RollerSession` owns the rolled-value pool and the per-ability
//! assignments, and enforces each generation method's rules: which
//! operations are legal in which step, how drops assign, swap, and
//! unassign, and the point-buy budget. It performs no I/O; the dialog
//! layer feeds it events and renders its state.

use serde::{Deserialize, Serialize};

use sf_core::{AbilityKey, AbilityScores, Assignments, DiceFormula, GenerationMethod, point_buy};

use crate::error::{DialogError, DialogResult};
use crate::pool::{RollId, RollPool};

/// Which phase of the dialog a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStep {
    /// Created but not yet seeded for a method. Transient: construction
    /// leaves this step before the session is handed out.
    Start,
    /// Generating rolled values.
    Rolling,
    /// Distributing generated values across ability slots.
    Assigning,
    /// Spending the point-buy budget.
    PointBuy,
}

impl std::fmt::Display for SessionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionStep::Start => "start",
            SessionStep::Rolling => "rolling",
            SessionStep::Assigning => "assigning",
            SessionStep::PointBuy => "point buy",
        };
        write!(f, "{name}")
    }
}

/// A roll the session has agreed to accept, handed to the dice tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRoll {
    /// Formula the tray must roll.
    pub formula: DiceFormula,
    /// Slot the result will lock to. Only the down-the-line method sets
    /// this.
    pub destination: Option<AbilityKey>,
}

/// The assignment engine for one ability-score dialog.
///
/// Construction performs the method's entry transition, so a fresh
/// session is already in its working step: rolling methods start in
/// [`SessionStep::Rolling`], the standard array starts assigning over a
/// pre-seeded pool, and point buy starts with every score at the floor.
#[derive(Debug, Clone)]
pub struct RollerSession {
    method: GenerationMethod,
    step: SessionStep,
    pool: RollPool,
    assignments: Assignments,
    pending: Option<PendingRoll>,
}

impl RollerSession {
    /// Create a session for a generation method.
    pub fn new(method: GenerationMethod) -> Self {
        let mut session = Self {
            method,
            step: SessionStep::Start,
            pool: RollPool::new(),
            assignments: Assignments::new(),
            pending: None,
        };
        match method {
            GenerationMethod::StandardArray => {
                session.pool = RollPool::standard_array();
                session.step = SessionStep::Assigning;
            }
            GenerationMethod::PointBuy => {
                session.assignments = Assignments::uniform(point_buy::FLOOR);
                session.step = SessionStep::PointBuy;
            }
            _ => session.step = SessionStep::Rolling,
        }
        session
    }

    /// The session's generation method.
    pub fn method(&self) -> GenerationMethod {
        self.method
    }

    /// The session's current step.
    pub fn step(&self) -> SessionStep {
        self.step
    }

    /// The rolled-value pool.
    pub fn pool(&self) -> &RollPool {
        &self.pool
    }

    /// The per-ability assignments.
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// True between [`RollerSession::begin_roll`] and its matching
    /// [`RollerSession::finish_roll`].
    pub fn roll_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask to roll the next value.
    ///
    /// Returns the roll the tray should perform, or `None` when there is
    /// nothing to roll: outside the rolling step, once a full set of
    /// values exists, or while another roll is in flight. Stale requests
    /// are expected from double-clicked buttons, so this is silent.
    pub fn begin_roll(&mut self) -> Option<PendingRoll> {
        if self.step != SessionStep::Rolling || self.pool.is_full() || self.pending.is_some() {
            return None;
        }
        let formula = self.method.formula()?;
        let destination = if self.method.is_in_order() {
            AbilityKey::from_index(self.pool.len())
        } else {
            None
        };
        let pending = PendingRoll { formula, destination };
        self.pending = Some(pending);
        Some(pending)
    }

    /// Land a finished roll's total, releasing the in-flight guard.
    ///
    /// Down-the-line rolls lock to their destination slot immediately.
    /// For the other rolling methods the session moves to assigning once
    /// the sixth value lands.
    pub fn finish_roll(&mut self, total: i32) -> DialogResult<RollId> {
        let pending = self.pending.take().ok_or(DialogError::NoPendingRoll)?;
        let id = self.pool.push(total, pending.destination);
        if let Some(key) = pending.destination {
            self.assignments.set(key, Some(total));
        }
        if self.pool.is_full() && !self.method.is_in_order() {
            self.step = SessionStep::Assigning;
        }
        Ok(id)
    }

    /// Move a rolled value onto an ability slot.
    ///
    /// From the pool, any current occupant is evicted back to the pool.
    /// From another slot this is a true two-way swap: the occupant, if
    /// any, takes the moved value's old slot; otherwise the old slot is
    /// left empty. Dropping a value on the slot it already claims is a
    /// no-op.
    pub fn assign(&mut self, id: RollId, target: AbilityKey) -> DialogResult<()> {
        self.require_step(SessionStep::Assigning)?;
        let source = *self.pool.get(id).ok_or(DialogError::UnknownRoll(id))?;
        if source.assigned_to == Some(target) {
            return Ok(());
        }
        let occupant = self.pool.claimant(target).copied();

        match source.assigned_to {
            None => {
                if let Some(occupant) = occupant {
                    self.pool.set_claim(occupant.id, None);
                }
            }
            Some(origin) => match occupant {
                Some(occupant) => {
                    self.pool.set_claim(occupant.id, Some(origin));
                    self.assignments.set(origin, Some(occupant.value));
                }
                None => {
                    self.assignments.set(origin, None);
                }
            },
        }

        self.pool.set_claim(id, Some(target));
        self.assignments.set(target, Some(source.value));
        Ok(())
    }

    /// Send a slot-resident value back to the pool. A value already in
    /// the pool is left untouched.
    pub fn unassign(&mut self, id: RollId) -> DialogResult<()> {
        self.require_step(SessionStep::Assigning)?;
        let source = *self.pool.get(id).ok_or(DialogError::UnknownRoll(id))?;
        let Some(origin) = source.assigned_to else {
            return Ok(());
        };
        self.pool.set_claim(id, None);
        self.assignments.set(origin, None);
        Ok(())
    }

    /// Propose `current value + delta` for a point-buy score.
    ///
    /// The proposal is rejected without any state change when it leaves
    /// the purchasable band or when the spread it creates would overrun
    /// the budget. Returns the value now held.
    pub fn adjust_point_buy(&mut self, key: AbilityKey, delta: i32) -> DialogResult<i32> {
        self.require_step(SessionStep::PointBuy)?;
        let current = self.assignments.get(key).unwrap_or(point_buy::FLOOR);
        let next = current + delta;
        if !point_buy::in_band(next) {
            return Err(DialogError::ScoreOutOfRange(next));
        }
        let spent = point_buy::total_cost(&self.assignments);
        let proposed = spent - point_buy::point_cost(current) + point_buy::point_cost(next);
        if proposed > point_buy::BUDGET {
            return Err(DialogError::OverBudget { proposed, budget: point_buy::BUDGET });
        }
        self.assignments.set(key, Some(next));
        Ok(next)
    }

    /// True once every ability has a value.
    pub fn can_confirm(&self) -> bool {
        self.assignments.is_complete()
    }

    /// The six confirmed base values.
    pub fn completed_assignments(&self) -> DialogResult<AbilityScores> {
        self.assignments
            .complete()
            .ok_or(DialogError::IncompleteAssignments)
    }

    fn require_step(&self, step: SessionStep) -> DialogResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(DialogError::StepMismatch(self.step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Drive a 4d6 session through six chosen totals into assigning.
    fn rolled_session(totals: [i32; 6]) -> RollerSession {
        let mut session = RollerSession::new(GenerationMethod::FourD6DropLowest);
        for total in totals {
            session.begin_roll().unwrap();
            session.finish_roll(total).unwrap();
        }
        session
    }

    /// Every slot claim is unique and assignments mirror the claims.
    fn assert_projection(session: &RollerSession) {
        let mut seen = std::collections::HashSet::new();
        for value in session.pool().values() {
            if let Some(slot) = value.assigned_to {
                assert!(seen.insert(slot), "two values claim {slot}");
            }
        }
        for key in AbilityKey::ALL {
            let claimed = session.pool().claimant(key).map(|v| v.value);
            assert_eq!(session.assignments().get(key), claimed, "slot {key}");
        }
    }

    #[test]
    fn rolling_methods_start_in_rolling() {
        for method in [
            GenerationMethod::FourD6DropLowest,
            GenerationMethod::ThreeD6,
            GenerationMethod::ThreeD6InOrder,
        ] {
            let session = RollerSession::new(method);
            assert_eq!(session.step(), SessionStep::Rolling);
            assert!(session.pool().is_empty());
            assert_eq!(session.assignments().assigned_count(), 0);
        }
    }

    #[test]
    fn standard_array_starts_assigning_with_seeded_pool() {
        let session = RollerSession::new(GenerationMethod::StandardArray);
        assert_eq!(session.step(), SessionStep::Assigning);
        assert!(session.pool().is_full());
        assert_eq!(session.pool().unassigned().count(), 6);
        assert!(!session.can_confirm());
    }

    #[test]
    fn point_buy_starts_at_the_floor() {
        let session = RollerSession::new(GenerationMethod::PointBuy);
        assert_eq!(session.step(), SessionStep::PointBuy);
        assert!(session.pool().is_empty());
        for key in AbilityKey::ALL {
            assert_eq!(session.assignments().get(key), Some(8));
        }
        assert!(session.can_confirm());
    }

    #[test]
    fn begin_roll_hands_out_the_method_formula() {
        let mut session = RollerSession::new(GenerationMethod::FourD6DropLowest);
        let pending = session.begin_roll().unwrap();
        assert_eq!(pending.formula, DiceFormula::FourD6DropLowest);
        assert_eq!(pending.destination, None);
        assert!(session.roll_in_flight());
    }

    #[test]
    fn begin_roll_is_guarded_while_one_is_in_flight() {
        let mut session = RollerSession::new(GenerationMethod::ThreeD6);
        assert!(session.begin_roll().is_some());
        assert!(session.begin_roll().is_none());
        session.finish_roll(11).unwrap();
        assert!(session.begin_roll().is_some());
    }

    #[test]
    fn begin_roll_refuses_a_full_pool() {
        let mut session = rolled_session([16, 14, 12, 10, 9, 8]);
        assert_eq!(session.step(), SessionStep::Assigning);
        assert!(session.begin_roll().is_none());
    }

    #[test]
    fn begin_roll_refuses_non_rolling_methods() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        assert!(session.begin_roll().is_none());
        let mut session = RollerSession::new(GenerationMethod::PointBuy);
        assert!(session.begin_roll().is_none());
    }

    #[test]
    fn finish_roll_without_begin_is_an_error() {
        let mut session = RollerSession::new(GenerationMethod::ThreeD6);
        assert!(matches!(session.finish_roll(10), Err(DialogError::NoPendingRoll)));
    }

    #[test]
    fn sixth_roll_moves_free_methods_to_assigning() {
        let mut session = RollerSession::new(GenerationMethod::ThreeD6);
        for total in [10, 11, 12, 13, 14] {
            session.begin_roll().unwrap();
            session.finish_roll(total).unwrap();
            assert_eq!(session.step(), SessionStep::Rolling);
        }
        session.begin_roll().unwrap();
        session.finish_roll(15).unwrap();
        assert_eq!(session.step(), SessionStep::Assigning);
        assert_eq!(session.pool().unassigned().count(), 6);
    }

    #[test]
    fn down_the_line_locks_each_roll_in_order() {
        let mut session = RollerSession::new(GenerationMethod::ThreeD6InOrder);
        let totals = [9, 10, 11, 12, 13, 14];
        for (key, total) in AbilityKey::ALL.into_iter().zip(totals) {
            let pending = session.begin_roll().unwrap();
            assert_eq!(pending.destination, Some(key));
            session.finish_roll(total).unwrap();
            assert_eq!(session.assignments().get(key), Some(total));
        }
        // The session never enters assigning: there is nothing to move.
        assert_eq!(session.step(), SessionStep::Rolling);
        assert!(session.can_confirm());
        assert!(session.begin_roll().is_none());
        assert_projection(&session);
    }

    #[test]
    fn locked_rolls_cannot_be_rearranged() {
        let mut session = RollerSession::new(GenerationMethod::ThreeD6InOrder);
        session.begin_roll().unwrap();
        let id = session.finish_roll(12).unwrap();
        assert!(matches!(
            session.assign(id, AbilityKey::Cha),
            Err(DialogError::StepMismatch(SessionStep::Rolling))
        ));
        assert!(matches!(
            session.unassign(id),
            Err(DialogError::StepMismatch(SessionStep::Rolling))
        ));
    }

    #[test]
    fn pool_drop_fills_an_empty_slot() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(0), AbilityKey::Str).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(15));
        assert_eq!(session.pool().unassigned().count(), 5);
        assert_projection(&session);
    }

    #[test]
    fn pool_drop_evicts_the_occupant() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(0), AbilityKey::Str).unwrap();
        session.assign(RollId(1), AbilityKey::Str).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(14));
        // The 15 is back in the pool, not lost.
        assert!(session.pool().unassigned().any(|v| v.id == RollId(0)));
        assert_projection(&session);
    }

    #[test]
    fn slot_drop_swaps_both_values() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(0), AbilityKey::Str).unwrap();
        session.assign(RollId(1), AbilityKey::Dex).unwrap();
        // Drag DEX's 14 onto STR: the 15 must land back on DEX.
        session.assign(RollId(1), AbilityKey::Str).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(14));
        assert_eq!(session.assignments().get(AbilityKey::Dex), Some(15));
        assert_eq!(session.pool().unassigned().count(), 4);
        assert_projection(&session);
    }

    #[test]
    fn slot_drop_onto_empty_slot_frees_the_origin() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(2), AbilityKey::Wis).unwrap();
        session.assign(RollId(2), AbilityKey::Cha).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Wis), None);
        assert_eq!(session.assignments().get(AbilityKey::Cha), Some(13));
        assert_projection(&session);
    }

    #[test]
    fn dropping_a_value_on_its_own_slot_changes_nothing() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(3), AbilityKey::Int).unwrap();
        session.assign(RollId(3), AbilityKey::Int).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Int), Some(12));
        assert_eq!(session.pool().unassigned().count(), 5);
        assert_projection(&session);
    }

    #[test]
    fn unassign_returns_a_value_to_the_pool() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(4), AbilityKey::Con).unwrap();
        session.unassign(RollId(4)).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Con), None);
        assert_eq!(session.pool().unassigned().count(), 6);
        assert_projection(&session);
    }

    #[test]
    fn unassign_of_a_pool_value_is_a_no_op() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.unassign(RollId(5)).unwrap();
        assert_eq!(session.pool().unassigned().count(), 6);
        assert_projection(&session);
    }

    #[test]
    fn unknown_ids_are_rejected_without_state_change() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        session.assign(RollId(0), AbilityKey::Str).unwrap();
        let before = *session.assignments();
        assert!(matches!(
            session.assign(RollId(99), AbilityKey::Dex),
            Err(DialogError::UnknownRoll(RollId(99)))
        ));
        assert!(matches!(
            session.unassign(RollId(99)),
            Err(DialogError::UnknownRoll(RollId(99)))
        ));
        assert_eq!(session.assignments(), &before);
        assert_projection(&session);
    }

    #[test]
    fn reassignment_walkthrough_keeps_both_sides() {
        // Pool holds a 16; STR wears a 14 and DEX a 12.
        let mut session = rolled_session([16, 14, 12, 10, 9, 8]);
        session.assign(RollId(1), AbilityKey::Str).unwrap();
        session.assign(RollId(2), AbilityKey::Dex).unwrap();

        // Pool 16 dropped on STR evicts the 14 back to the pool.
        session.assign(RollId(0), AbilityKey::Str).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(16));
        assert!(session.pool().unassigned().any(|v| v.id == RollId(1)));

        // STR's 16 dragged onto DEX swaps with the 12 there.
        session.assign(RollId(0), AbilityKey::Dex).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(12));
        assert_eq!(session.assignments().get(AbilityKey::Dex), Some(16));
        assert!(session.pool().unassigned().any(|v| v.id == RollId(1)));

        // Dragging DEX's value to the pool leaves the slot empty.
        session.unassign(RollId(0)).unwrap();
        assert_eq!(session.assignments().get(AbilityKey::Dex), None);
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(12));
        assert_projection(&session);
    }

    #[test]
    fn adjust_steps_up_and_down() {
        let mut session = RollerSession::new(GenerationMethod::PointBuy);
        assert_eq!(session.adjust_point_buy(AbilityKey::Str, 1).unwrap(), 9);
        assert_eq!(session.adjust_point_buy(AbilityKey::Str, 1).unwrap(), 10);
        assert_eq!(session.adjust_point_buy(AbilityKey::Str, -1).unwrap(), 9);
        assert_eq!(point_buy::total_cost(session.assignments()), 1);
    }

    #[test]
    fn adjust_rejects_values_outside_the_band() {
        let mut session = RollerSession::new(GenerationMethod::PointBuy);
        assert!(matches!(
            session.adjust_point_buy(AbilityKey::Str, -1),
            Err(DialogError::ScoreOutOfRange(7))
        ));
        assert_eq!(session.assignments().get(AbilityKey::Str), Some(8));
        assert!(matches!(
            session.adjust_point_buy(AbilityKey::Str, 8),
            Err(DialogError::ScoreOutOfRange(16))
        ));
    }

    #[test]
    fn adjust_rejects_overspending() {
        let mut session = RollerSession::new(GenerationMethod::PointBuy);
        // 15/15/15 would cost 27: legal, and exactly on budget.
        session.adjust_point_buy(AbilityKey::Str, 7).unwrap();
        session.adjust_point_buy(AbilityKey::Dex, 7).unwrap();
        session.adjust_point_buy(AbilityKey::Con, 7).unwrap();
        assert_eq!(point_buy::points_remaining(session.assignments()), 0);

        let result = session.adjust_point_buy(AbilityKey::Wis, 1);
        assert!(matches!(
            result,
            Err(DialogError::OverBudget {
                proposed: 28,
                budget: 27
            })
        ));
        assert_eq!(session.assignments().get(AbilityKey::Wis), Some(8));
    }

    #[test]
    fn refunds_reopen_the_budget() {
        let mut session = RollerSession::new(GenerationMethod::PointBuy);
        session.adjust_point_buy(AbilityKey::Str, 7).unwrap();
        session.adjust_point_buy(AbilityKey::Dex, 7).unwrap();
        session.adjust_point_buy(AbilityKey::Con, 7).unwrap();
        // Dropping STR to 13 frees four points.
        session.adjust_point_buy(AbilityKey::Str, -2).unwrap();
        assert_eq!(session.adjust_point_buy(AbilityKey::Wis, 4).unwrap(), 12);
        assert_eq!(point_buy::total_cost(session.assignments()), 27);
    }

    #[test]
    fn adjust_outside_point_buy_is_a_step_mismatch() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        assert!(matches!(
            session.adjust_point_buy(AbilityKey::Str, 1),
            Err(DialogError::StepMismatch(SessionStep::Assigning))
        ));
    }

    #[test]
    fn completed_assignments_requires_all_six() {
        let mut session = RollerSession::new(GenerationMethod::StandardArray);
        for (index, key) in AbilityKey::ALL.into_iter().enumerate().skip(1) {
            session.assign(RollId(index as u32), key).unwrap();
        }
        assert!(!session.can_confirm());
        assert!(matches!(
            session.completed_assignments(),
            Err(DialogError::IncompleteAssignments)
        ));

        session.assign(RollId(0), AbilityKey::Str).unwrap();
        assert!(session.can_confirm());
        let scores = session.completed_assignments().unwrap();
        assert_eq!(scores.get(AbilityKey::Str), 15);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Assign(u32, usize),
        Unassign(u32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..8, 0usize..6).prop_map(|(id, slot)| Op::Assign(id, slot)),
            (0u32..8).prop_map(Op::Unassign),
        ]
    }

    proptest! {
        #[test]
        fn assignments_always_mirror_pool_claims(ops in proptest::collection::vec(arb_op(), 1..60)) {
            let mut session = RollerSession::new(GenerationMethod::StandardArray);
            for op in ops {
                match op {
                    Op::Assign(id, slot) => {
                        let _ = session.assign(RollId(id), AbilityKey::ALL[slot]);
                    }
                    Op::Unassign(id) => {
                        let _ = session.unassign(RollId(id));
                    }
                }
                assert_projection(&session);
            }
        }

        #[test]
        fn point_buy_never_overruns_budget_or_band(
            ops in proptest::collection::vec((0usize..6, -3i32..=7), 1..80),
        ) {
            let mut session = RollerSession::new(GenerationMethod::PointBuy);
            for (slot, delta) in ops {
                let _ = session.adjust_point_buy(AbilityKey::ALL[slot], delta);
                let assignments = session.assignments();
                prop_assert!(point_buy::total_cost(assignments) <= point_buy::BUDGET);
                for (_, value) in assignments.iter() {
                    let value = value.unwrap();
                    prop_assert!(point_buy::in_band(value));
                }
            }
        }
    }
}
