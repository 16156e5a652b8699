//! Configuration for an ability-score dialog.

use sf_core::GenerationMethod;

/// Configuration for a dialog session.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// RNG seed for the built-in dice tray.
    pub seed: u64,
    /// Generation method override. `None` reads the host's world setting,
    /// falling back to the default method.
    pub method: Option<GenerationMethod>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            method: None,
        }
    }
}

impl DialogConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Force a generation method, ignoring the host's world setting.
    pub fn with_method(mut self, method: GenerationMethod) -> Self {
        self.method = Some(method);
        self
    }
}
