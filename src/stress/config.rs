//! Stress run parameters

use super::StressError;

/// Parameters of one differential stress run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressConfig {
    /// Number of elements in the tree under test
    pub size: usize,

    /// Number of random operations
    pub rounds: usize,

    /// Seed for the operation stream
    pub seed: u64,

    /// Update constants are drawn from `[-max_value, max_value]`
    pub max_value: i64,

    /// Share of rounds that are updates, in percent
    pub update_percent: u8,
}

impl StressConfig {
    /// Defaults for a tree of `size` elements.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rounds: 10_000,
            seed: 0,
            max_value: 100,
            update_percent: 50,
        }
    }

    /// Set the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the bound on update constants.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the share of update rounds.
    pub fn with_update_percent(mut self, update_percent: u8) -> Self {
        self.update_percent = update_percent;
        self
    }

    /// Reject parameters the runner cannot honour.
    pub fn validate(&self) -> Result<(), StressError> {
        if self.size == 0 {
            return Err(StressError::InvalidConfig(
                "size must be > 0".to_string(),
            ));
        }
        if self.max_value < 0 {
            return Err(StressError::InvalidConfig(format!(
                "max value must be >= 0, got {}",
                self.max_value
            )));
        }
        if self.update_percent > 100 {
            return Err(StressError::InvalidConfig(format!(
                "update percent must be <= 100, got {}",
                self.update_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = StressConfig::new(64)
            .with_rounds(5)
            .with_seed(9)
            .with_max_value(3)
            .with_update_percent(80);
        assert_eq!(config.size, 64);
        assert_eq!(config.rounds, 5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_value, 3);
        assert_eq!(config.update_percent, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonsense() {
        assert!(StressConfig::new(0).validate().is_err());
        assert!(StressConfig::new(4).with_max_value(-1).validate().is_err());
        assert!(StressConfig::new(4).with_update_percent(101).validate().is_err());
    }
}
