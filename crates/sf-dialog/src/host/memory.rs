//! An in-memory host: a flat flag store and a self-contained character.
//!
//! [`MemoryHost`] backs the test suite and embedders that have no richer
//! document store. Writes never fail here; notifications and the close
//! request are recorded for inspection instead of shown.

use std::collections::HashMap;

use serde_json::Value;

use sf_core::{AbilityScores, Assignments};

use crate::error::HostError;
use crate::host::bridge::{
    ASSIGNMENTS_FLAG, HostBridge, ROLLED_FLAG, assignments_from_flag, assignments_to_flag,
};

/// A flat string-keyed flag store.
#[derive(Debug, Clone, Default)]
pub struct FlagStore {
    flags: HashMap<String, Value>,
}

impl FlagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a flag.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.flags.get(key)
    }

    /// Write a flag.
    pub fn set(&mut self, key: &str, value: Value) {
        self.flags.insert(key.to_string(), value);
    }

    /// Remove a flag. Returns whether it existed.
    pub fn unset(&mut self, key: &str) -> bool {
        self.flags.remove(key).is_some()
    }
}

/// A reference host keeping everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    scores: AbilityScores,
    flags: FlagStore,
    method: Option<String>,
    closed: bool,
    infos: Vec<String>,
    warnings: Vec<String>,
}

impl MemoryHost {
    /// Create a host with every ability at the default total of 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with specific current totals.
    pub fn with_scores(scores: AbilityScores) -> Self {
        Self {
            scores,
            ..Self::default()
        }
    }

    /// Set the world's generation-method setting.
    pub fn set_method_setting(&mut self, id: &str) {
        self.method = Some(id.to_string());
    }

    /// Direct access to the flag store.
    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    /// True once the dialog was asked to close.
    pub fn dialog_closed(&self) -> bool {
        self.closed
    }

    /// Informational notifications in emission order.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Warning notifications in emission order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl HostBridge for MemoryHost {
    fn ability_scores(&self) -> AbilityScores {
        self.scores
    }

    fn stored_assignments(&self) -> Option<Assignments> {
        self.flags.get(ASSIGNMENTS_FLAG).map(assignments_from_flag)
    }

    fn has_rolled(&self) -> bool {
        self.flags
            .get(ROLLED_FLAG)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn method_setting(&self) -> Option<String> {
        self.method.clone()
    }

    fn update_abilities(&mut self, scores: &AbilityScores) -> Result<(), HostError> {
        self.scores = *scores;
        Ok(())
    }

    fn write_assignments(&mut self, assignments: &Assignments) -> Result<(), HostError> {
        self.flags
            .set(ASSIGNMENTS_FLAG, assignments_to_flag(assignments));
        Ok(())
    }

    fn clear_assignments(&mut self) -> Result<(), HostError> {
        self.flags.unset(ASSIGNMENTS_FLAG);
        Ok(())
    }

    fn set_rolled(&mut self, rolled: bool) -> Result<(), HostError> {
        self.flags.set(ROLLED_FLAG, Value::Bool(rolled));
        Ok(())
    }

    fn notify_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn notify_warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn close_dialog(&mut self) {
        self.closed = true;
    }
}
