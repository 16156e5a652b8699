//! Bridge ports between the dialog and its host application.
//!
//! The host owns the character record, the world settings, notifications,
//! and the dialog chrome; the engine reaches all of them through
//! [`HostBridge`]. Reads come from the host's live document and cannot
//! fail. Writes persist and can, and the engine never retries a failed
//! write: the error propagates to the host's own surface.

use serde_json::Value;

use sf_core::{AbilityKey, AbilityScores, Assignments};

use crate::error::HostError;

/// Flag key under which confirmed base values are stored.
pub const ASSIGNMENTS_FLAG: &str = "assignments";

/// Flag key under which the has-rolled marker is stored.
pub const ROLLED_FLAG: &str = "rolled";

/// Read/write access to the hosted character record and world settings.
pub trait HostBridge {
    /// The character's current ability totals.
    fn ability_scores(&self) -> AbilityScores;

    /// Base values stored at the last confirm, if any.
    fn stored_assignments(&self) -> Option<Assignments>;

    /// Whether this character has confirmed a roll before.
    fn has_rolled(&self) -> bool;

    /// The world's configured generation-method setting, if present.
    fn method_setting(&self) -> Option<String>;

    /// Overwrite the six ability totals.
    fn update_abilities(&mut self, scores: &AbilityScores) -> Result<(), HostError>;

    /// Store the confirmed base values.
    fn write_assignments(&mut self, assignments: &Assignments) -> Result<(), HostError>;

    /// Remove the stored base values.
    fn clear_assignments(&mut self) -> Result<(), HostError>;

    /// Set or clear the has-rolled marker.
    fn set_rolled(&mut self, rolled: bool) -> Result<(), HostError>;

    /// Emit an informational notification.
    fn notify_info(&mut self, message: &str);

    /// Emit a warning notification.
    fn notify_warn(&mut self, message: &str);

    /// Close the dialog chrome.
    fn close_dialog(&mut self);
}

/// True while the host should offer its roll-abilities entry point.
///
/// The entry point disappears once a confirm has stored assignments and
/// returns after a reset clears them.
pub fn offer_roller(host: &dyn HostBridge) -> bool {
    host.stored_assignments().is_none()
}

/// Encode stored assignments into the flat flag shape: a JSON object
/// keyed by ability abbreviation, unassigned keys omitted.
pub fn assignments_to_flag(assignments: &Assignments) -> Value {
    let mut map = serde_json::Map::new();
    for (key, value) in assignments.iter() {
        if let Some(value) = value {
            map.insert(key.abbr().to_string(), Value::from(value));
        }
    }
    Value::Object(map)
}

/// Decode a flag value back into stored assignments.
///
/// Junk entries (unknown keys, non-integer values) are skipped rather
/// than failing the read; a flag written by an older build should never
/// lock a character out of the dialog.
pub fn assignments_from_flag(value: &Value) -> Assignments {
    let mut out = Assignments::new();
    if let Value::Object(map) = value {
        for (name, entry) in map {
            let Some(key) = AbilityKey::parse(name) else {
                continue;
            };
            if let Some(number) = entry.as_i64() {
                out.set(key, Some(number as i32));
            }
        }
    }
    out
}
