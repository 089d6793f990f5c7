//! Simulation configuration.
//!
//! Hosts configure the controller at startup with a `SimulationConfig`:
//! which densities the user may pick, which one is selected first, the RNG
//! seed, and the probability that a cell starts alive.

use serde::{Deserialize, Serialize};

use super::density::Density;
use super::error::LifeError;

/// Configuration for a `SimulationController`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Densities the user may select (subset of `Density::SUPPORTED`).
    pub densities: Vec<Density>,

    /// Density selected before the user picks one.
    pub default_density: Density,

    /// Seed for the controller RNG.
    /// Same seed produces the same initial layouts, run after run.
    pub seed: u64,

    /// Probability that a cell starts alive (default: 0.5).
    pub fill_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            densities: Density::SUPPORTED.to_vec(),
            default_density: Density::DEFAULT,
            seed: 42,
            fill_probability: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom initial density.
    #[must_use]
    pub fn with_default_density(mut self, density: Density) -> Self {
        self.default_density = density;
        self
    }

    /// Restrict the densities the user may select.
    #[must_use]
    pub fn with_densities(mut self, densities: impl IntoIterator<Item = Density>) -> Self {
        self.densities = densities.into_iter().collect();
        self
    }

    /// Create a new config with custom fill probability.
    #[must_use]
    pub fn with_fill_probability(mut self, probability: f64) -> Self {
        self.fill_probability = probability;
        self
    }

    /// Check whether a density may be selected.
    #[must_use]
    pub fn allows(&self, density: Density) -> bool {
        self.densities.contains(&density)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.densities.is_empty() {
            return Err(LifeError::InvalidConfig("at least one density must be enabled"));
        }
        if !self.allows(self.default_density) {
            return Err(LifeError::InvalidConfig("default density must be one of the enabled densities"));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(LifeError::InvalidConfig("fill probability must be between 0.0 and 1.0"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, LifeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_density, Density::SMALL);
        assert_eq!(config.densities, Density::SUPPORTED.to_vec());
        assert_eq!(config.fill_probability, 0.5);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::default()
            .with_seed(7)
            .with_densities([Density::MEDIUM, Density::LARGE])
            .with_default_density(Density::LARGE)
            .with_fill_probability(0.25);

        assert_eq!(config.seed, 7);
        assert!(!config.allows(Density::SMALL));
        assert!(config.allows(Density::LARGE));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_density_must_be_enabled() {
        let config = SimulationConfig::default().with_densities([Density::LARGE]);
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_densities_rejected() {
        let config = SimulationConfig::default().with_densities(Vec::new());
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn test_fill_probability_range() {
        assert!(SimulationConfig::default().with_fill_probability(1.5).validate().is_err());
        assert!(SimulationConfig::default().with_fill_probability(-0.1).validate().is_err());
        assert!(SimulationConfig::default().with_fill_probability(f64::NAN).validate().is_err());
        assert!(SimulationConfig::default().with_fill_probability(1.0).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SimulationConfig::from_json(r#"{ "seed": 9, "default_density": 16 }"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.default_density, Density::MEDIUM);
        assert_eq!(config.fill_probability, 0.5);
    }

    #[test]
    fn test_from_json_rejects_unsupported_density() {
        let result = SimulationConfig::from_json(r#"{ "default_density": 12 }"#);
        assert!(matches!(result, Err(LifeError::ConfigParse(_))));
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let result = SimulationConfig::from_json(r#"{ "fill_probability": 2.0 }"#);
        assert!(matches!(result, Err(LifeError::InvalidConfig(_))));
    }
}
