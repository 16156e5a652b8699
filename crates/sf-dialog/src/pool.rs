//! The rolled-value pool owned by one dialog session.

use serde::{Deserialize, Serialize};

use sf_core::{AbilityKey, STANDARD_ARRAY};

/// Identifier of a rolled value, unique and stable within one session.
///
/// Ids are allocation order: the first generated value gets id 0. They are
/// what drag payloads carry, so they never change once handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RollId(pub u32);

impl std::fmt::Display for RollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated score waiting in the pool or claiming an ability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledValue {
    /// Stable identifier for drag references.
    pub id: RollId,
    /// The generated score.
    pub value: i32,
    /// The ability slot this value currently claims, if any.
    pub assigned_to: Option<AbilityKey>,
}

/// Owns every generated value of a session and allocates their ids.
///
/// Values are never removed; moving between the pool and a slot only
/// repoints `assigned_to`.
#[derive(Debug, Clone, Default)]
pub struct RollPool {
    values: Vec<RolledValue>,
    next_id: u32,
}

impl RollPool {
    /// Capacity of the pool: one value per ability.
    pub const CAPACITY: usize = 6;

    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool pre-seeded with the standard array, all unassigned.
    pub fn standard_array() -> Self {
        let mut pool = Self::new();
        for value in STANDARD_ARRAY {
            pool.push(value, None);
        }
        pool
    }

    /// Append a value, returning its freshly allocated id.
    pub(crate) fn push(&mut self, value: i32, assigned_to: Option<AbilityKey>) -> RollId {
        let id = RollId(self.next_id);
        self.next_id += 1;
        self.values.push(RolledValue {
            id,
            value,
            assigned_to,
        });
        id
    }

    /// Number of values generated so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once a full set of values exists.
    pub fn is_full(&self) -> bool {
        self.values.len() >= Self::CAPACITY
    }

    /// Look up a value by id.
    pub fn get(&self, id: RollId) -> Option<&RolledValue> {
        self.values.iter().find(|v| v.id == id)
    }

    /// The value currently claiming `slot`, if any.
    pub fn claimant(&self, slot: AbilityKey) -> Option<&RolledValue> {
        self.values.iter().find(|v| v.assigned_to == Some(slot))
    }

    /// Values not claiming any slot, in generation order.
    pub fn unassigned(&self) -> impl Iterator<Item = &RolledValue> {
        self.values.iter().filter(|v| v.assigned_to.is_none())
    }

    /// All values in generation order.
    pub fn values(&self) -> &[RolledValue] {
        &self.values
    }

    /// Repoint the value with `id` at a slot, or back at the pool.
    pub(crate) fn set_claim(&mut self, id: RollId, slot: Option<AbilityKey>) {
        if let Some(value) = self.values.iter_mut().find(|v| v.id == id) {
            value.assigned_to = slot;
        }
    }
}
