pub use neurite_core::config::*;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
    /// Ticks per generation.
    pub total_moves: u32,
    pub max_entities: usize,
    pub initial_entities: usize,
    /// Chance that each survivor leaves one child.
    pub reproduce_chance: f64,
    /// Fresh agents placed when a generation leaves no survivors.
    pub reseed_count: usize,
    /// Random cells tried before a placement is given up.
    pub placement_attempts: usize,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 32,
            total_moves: 50,
            max_entities: 50,
            initial_entities: 50,
            reproduce_chance: 0.8,
            reseed_count: 10,
            placement_attempts: 1000,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct HostConfig {
    pub world: WorldConfig,
    pub engine: EngineConfig,
}

impl HostConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let g = self.world.grid_size;
        anyhow::ensure!(g >= 8, "Grid size must be at least 8");
        anyhow::ensure!(self.world.total_moves > 0, "Total moves must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.world.reproduce_chance),
            "Reproduce chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.world.placement_attempts > 0,
            "Placement attempts must be positive"
        );
        // Placement draws from columns 0..g-1 and skips rows 0..=2 and g-2..
        let free_cells = (g - 5) as usize * (g - 1) as usize;
        anyhow::ensure!(
            self.world.max_entities <= free_cells,
            "Max entities ({}) exceeds the {} cells outside the survive zones",
            self.world.max_entities,
            free_cells
        );
        anyhow::ensure!(
            self.world.initial_entities <= self.world.max_entities,
            "Initial entities must not exceed max entities"
        );
        anyhow::ensure!(
            self.world.reseed_count <= self.world.max_entities,
            "Reseed count must not exceed max entities"
        );
        self.engine.validate()
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }
}
