//! Configuration for an interaction session.

/// Configuration options for the interaction engine.
#[derive(Debug, Clone)]
pub struct InteractConfig {
    /// Close the interaction dialog automatically after an item is used.
    pub auto_close_dialog: bool,
    /// Assume proficiency on attack rolls instead of asking.
    pub auto_proficiency: bool,
    /// RNG seed for reproducible rolls.
    pub seed: u64,
}

impl Default for InteractConfig {
    fn default() -> Self {
        Self {
            auto_close_dialog: true,
            auto_proficiency: true,
            seed: 42,
        }
    }
}

impl InteractConfig {
    /// Set whether the dialog closes after use.
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close_dialog = auto_close;
        self
    }

    /// Set whether attack proficiency is assumed.
    pub fn with_auto_proficiency(mut self, auto: bool) -> Self {
        self.auto_proficiency = auto;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = InteractConfig::default();
        assert!(cfg.auto_close_dialog);
        assert!(cfg.auto_proficiency);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let cfg = InteractConfig::default()
            .with_auto_close(false)
            .with_auto_proficiency(false)
            .with_seed(7);
        assert!(!cfg.auto_close_dialog);
        assert!(!cfg.auto_proficiency);
        assert_eq!(cfg.seed, 7);
    }
}
