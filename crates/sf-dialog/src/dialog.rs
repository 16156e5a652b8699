//! The dialog orchestrator: wires a session to its host.
//!
//! `RollerDialog` feeds UI events into the session, turns validation
//! rejections into user-visible warnings, and runs the confirm and reset
//! persistence sequences in their required order. The host type stays
//! generic so embedders keep concrete access to their own bridge.

use sf_core::{AbilityKey, GenerationMethod, reconcile};

use crate::config::DialogConfig;
use crate::drag::{DragOrigin, DragPayload};
use crate::error::{DialogError, DialogResult};
use crate::host::HostBridge;
use crate::pool::RollId;
use crate::session::RollerSession;
use crate::tray::{DiceTray, RngTray};
use crate::view::SessionView;

/// Drop target of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// An ability slot.
    Slot(AbilityKey),
    /// The unassigned pool.
    Pool,
}

/// One interactive ability-score dialog bound to a host.
pub struct RollerDialog<H> {
    session: RollerSession,
    host: H,
    tray: Box<dyn DiceTray>,
}

impl<H: HostBridge> RollerDialog<H> {
    /// Open a dialog against a host, rolling with the built-in seeded
    /// tray.
    ///
    /// The generation method comes from `config.method` if set, else from
    /// the host's world setting, else the default.
    pub fn open(host: H, config: DialogConfig) -> Self {
        let tray = Box::new(RngTray::new(config.seed));
        Self::open_with_tray(host, tray, config)
    }

    /// Open a dialog with a custom dice tray, for hosts that animate
    /// their rolls.
    pub fn open_with_tray(host: H, tray: Box<dyn DiceTray>, config: DialogConfig) -> Self {
        let method = config
            .method
            .or_else(|| {
                host.method_setting()
                    .as_deref()
                    .and_then(GenerationMethod::from_setting)
            })
            .unwrap_or_default();
        Self {
            session: RollerSession::new(method),
            host,
            tray,
        }
    }

    /// The live session.
    pub fn session(&self) -> &RollerSession {
        &self.session
    }

    /// The bound host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Give the host back, discarding the session.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Derive the current render snapshot.
    pub fn view(&self) -> SessionView {
        SessionView::of(&self.session)
    }

    /// Roll the next value through the dice tray.
    ///
    /// Returns the landed roll's id, or `Ok(None)` when the session has
    /// nothing to roll (wrong step, full pool, or a roll already in
    /// flight).
    pub fn roll_next(&mut self) -> DialogResult<Option<RollId>> {
        let Some(pending) = self.session.begin_roll() else {
            return Ok(None);
        };
        let outcome = self.tray.roll(pending.formula);
        self.tray.show(&outcome);
        let id = self.session.finish_roll(outcome.total())?;
        Ok(Some(id))
    }

    /// Handle a drop of raw drag-transfer text onto a target.
    ///
    /// Malformed payloads are ignored, as are drops that are stale by the
    /// time they land (unknown ids, wrong step). Neither warrants a
    /// notification.
    pub fn drop_payload(&mut self, text: &str, target: DropTarget) {
        let Some(data) = DragPayload::decode(text) else {
            return;
        };
        let result = match target {
            DropTarget::Slot(key) => self.session.assign(data.roll_id, key),
            DropTarget::Pool => match data.origin {
                DragOrigin::Pool => Ok(()),
                DragOrigin::Slot(_) => self.session.unassign(data.roll_id),
            },
        };
        let _ = result;
    }

    /// Adjust a point-buy score, warning the user on rejected proposals.
    ///
    /// Returns the value now held, or the rejection after its warning has
    /// been emitted.
    pub fn adjust(&mut self, key: AbilityKey, delta: i32) -> DialogResult<i32> {
        match self.session.adjust_point_buy(key, delta) {
            Ok(value) => Ok(value),
            Err(err) => {
                match &err {
                    DialogError::ScoreOutOfRange(_) => {
                        self.host
                            .notify_warn("Ability scores must stay between 8 and 15.");
                    }
                    DialogError::OverBudget { .. } => {
                        self.host.notify_warn("You don't have enough points left!");
                    }
                    _ => {}
                }
                Err(err)
            }
        }
    }

    /// Confirm the assignments and persist them through the host.
    ///
    /// Warns and aborts, leaving all state unchanged, when any ability is
    /// still unassigned. On success the totals update first, then the
    /// stored assignments, then the has-rolled marker; the dialog closes
    /// before the confirmation notice goes out. A failed host write
    /// propagates immediately and nothing later in the sequence runs.
    pub fn confirm(&mut self) -> DialogResult<()> {
        let bases = match self.session.completed_assignments() {
            Ok(bases) => bases,
            Err(err) => {
                self.host
                    .notify_warn("Please assign all stats before confirming.");
                return Err(err);
            }
        };
        let stored = self.host.stored_assignments().unwrap_or_default();
        let current = self.host.ability_scores();
        let merged = reconcile::apply_bases(&bases, &current, &stored);

        self.host.update_abilities(&merged)?;
        let confirmed = *self.session.assignments();
        self.host.write_assignments(&confirmed)?;
        self.host.set_rolled(true)?;
        self.host.close_dialog();
        self.host.notify_info("Stats applied successfully!");
        Ok(())
    }
}

/// Reset a character's abilities to the default base, keeping carried
/// bonuses.
///
/// Works without an open dialog. The totals update first and the stored
/// assignments are cleared afterward, so a failure between the two leaves
/// the stored bases in place for a retry. The has-rolled marker is left
/// alone.
pub fn reset_abilities(host: &mut dyn HostBridge) -> DialogResult<()> {
    let stored = host.stored_assignments().unwrap_or_default();
    let current = host.ability_scores();
    let totals = reconcile::reset_totals(&current, &stored);
    host.update_abilities(&totals)?;
    host.clear_assignments()?;
    host.notify_info("Ability scores have been reset to default values (preserving bonuses).");
    Ok(())
}
