//! Configuration for growth, mutation and reproduction.
//!
//! Maps onto the `[engine]` table of the host's `config.toml`; every field
//! has a default so partial files are accepted.
//!
//! ```toml
//! [growth]
//! max_attempts = 100
//! weight_range = 1.0
//!
//! [mutation]
//! removal_chance = 0.002
//! max_removals = 1
//!
//! [reproduction]
//! connection_bias = 0.5
//! initial_connections = 3
//! initial_neurons = 2
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrowthConfig {
    /// Tries spent looking for a valid source (and again for a destination).
    pub max_attempts: usize,
    /// New weights are drawn from `[-weight_range, weight_range)`.
    pub weight_range: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            weight_range: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MutationConfig {
    /// Probability that one `mutate` call slates Middle neurons for removal.
    pub removal_chance: f64,
    /// How many Middle neurons a successful trial removes.
    pub max_removals: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            removal_chance: 1.0 / 500.0,
            max_removals: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    /// Chance that a child gains a connection rather than a neuron.
    pub connection_bias: f64,
    /// Connections grown when a default agent is set up.
    pub initial_connections: usize,
    /// Middle neurons grown when a default agent is set up.
    pub initial_neurons: usize,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            connection_bias: 0.5,
            initial_connections: 3,
            initial_neurons: 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub growth: GrowthConfig,
    pub mutation: MutationConfig,
    pub reproduction: ReproductionConfig,
}

impl EngineConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if every parameter is usable, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.growth.max_attempts > 0,
            "Growth attempts must be positive"
        );
        anyhow::ensure!(
            self.growth.weight_range > 0.0 && self.growth.weight_range <= 1.0,
            "Weight range must be in (0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation.removal_chance),
            "Removal chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.reproduction.connection_bias),
            "Connection bias must be in [0.0, 1.0]"
        );
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of every tunable, for tagging runs in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.growth).as_bytes());
        hasher.update(format!("{:?}", self.mutation).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = EngineConfig {
            growth: GrowthConfig {
                max_attempts: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_removal_chance() {
        let config = EngineConfig {
            mutation: MutationConfig {
                removal_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml("[mutation]\nremoval_chance = 0.5\n")
            .expect("partial config should parse");
        assert_eq!(config.mutation.removal_chance, 0.5);
        assert_eq!(config.mutation.max_removals, 1);
        assert_eq!(config.growth, GrowthConfig::default());
    }

    #[test]
    fn test_fingerprint_tracks_changes() {
        let base = EngineConfig::default();
        let mut tweaked = EngineConfig::default();
        tweaked.reproduction.connection_bias = 0.9;
        assert_eq!(base.fingerprint(), EngineConfig::default().fingerprint());
        assert_ne!(base.fingerprint(), tweaked.fingerprint());
    }
}
