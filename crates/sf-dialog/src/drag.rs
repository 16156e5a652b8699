//! Drag payload wire codec.
//!
//! Drag-and-drop hands a small JSON record through the platform's text
//! transfer. Index and value travel as strings because that is what drag
//! data attributes give us; origin is either an ability abbreviation or
//! the literal `"pool"`. Anything malformed decodes to `None` and is
//! ignored upstream, since foreign drops landing on the dialog are
//! routine, not errors.

use serde::{Deserialize, Serialize};

use sf_core::AbilityKey;

use crate::pool::RollId;

/// Where a dragged value chip started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// The unassigned pool.
    Pool,
    /// An ability slot.
    Slot(AbilityKey),
}

/// The raw record carried through the drag transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Rolled-value id, stringified.
    pub index: String,
    /// Score value, stringified.
    pub value: String,
    /// Ability abbreviation, or `"pool"`.
    pub origin: String,
}

/// A decoded, typed drag record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragData {
    /// The dragged rolled value.
    pub roll_id: RollId,
    /// Score carried for display. The engine re-reads the authoritative
    /// value from its pool and never trusts this field.
    pub value: i32,
    /// Where the chip started.
    pub origin: DragOrigin,
}

impl DragPayload {
    /// Build the wire record for a chip.
    pub fn new(roll_id: RollId, value: i32, origin: DragOrigin) -> Self {
        let origin = match origin {
            DragOrigin::Pool => "pool".to_string(),
            DragOrigin::Slot(key) => key.abbr().to_string(),
        };
        Self {
            index: roll_id.to_string(),
            value: value.to_string(),
            origin,
        }
    }

    /// Serialize to transfer text.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode transfer text into a typed record. Malformed JSON, missing
    /// fields, or unparseable field values all yield `None`.
    pub fn decode(text: &str) -> Option<DragData> {
        let payload: DragPayload = serde_json::from_str(text).ok()?;
        payload.data()
    }

    /// Typed view of this record, if every field parses.
    pub fn data(&self) -> Option<DragData> {
        let roll_id = RollId(self.index.trim().parse().ok()?);
        let value = self.value.trim().parse().ok()?;
        let origin = if self.origin == "pool" {
            DragOrigin::Pool
        } else {
            DragOrigin::Slot(AbilityKey::parse(&self.origin)?)
        };
        Some(DragData {
            roll_id,
            value,
            origin,
        })
    }
}
