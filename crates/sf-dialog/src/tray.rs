//! Dice tray capability: where the dialog's dice totals come from.
//!
//! Hosts with a dice renderer implement [`DiceTray`] to animate rolls.
//! The built-in [`RngTray`] rolls with a seeded RNG and no ceremony.

use rand::SeedableRng;
use rand::rngs::StdRng;

use sf_core::{DiceFormula, RollOutcome};

/// Produces dice outcomes for the dialog.
///
/// A `roll` call may take as long as it likes (3D dice, artificial
/// suspense). The session's in-flight guard holds from the moment the
/// roll is requested until its total lands, so a slow tray cannot be
/// raced by a second request.
pub trait DiceTray {
    /// Roll a formula and return the outcome.
    fn roll(&mut self, formula: DiceFormula) -> RollOutcome;

    /// Visualization hook invoked with each outcome before its total is
    /// consumed. The default does nothing.
    fn show(&mut self, _outcome: &RollOutcome) {}
}

/// The built-in tray: a seeded RNG and no visualization.
#[derive(Debug)]
pub struct RngTray {
    rng: StdRng,
}

impl RngTray {
    /// Create a tray from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceTray for RngTray {
    fn roll(&mut self, formula: DiceFormula) -> RollOutcome {
        formula.roll(&mut self.rng)
    }
}
