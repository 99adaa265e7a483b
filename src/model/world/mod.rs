use crate::model::config::HostConfig;
use crate::model::entity::{Entity, Zone};
use neurite_core::{Metrics, NetworkLogic, NetworkSnapshot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

pub mod finalize;
pub mod sensing;
pub mod update;

/// Result of one [`World::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The move budget is spent; call [`World::next_generation`].
    GenerationEnded,
}

/// What a generation boundary produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub generation: u64,
    pub survivors: usize,
    pub population: usize,
    pub neurons: usize,
    pub connections: usize,
}

/// Headless grid host that drives a population of agents through
/// generations of movement and survive-zone selection.
pub struct World {
    pub config: HostConfig,
    pub entities: Vec<Entity>,
    pub zones: Vec<Zone>,
    pub moves_left: u32,
    pub generation: u64,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
}

impl World {
    pub fn new(config: HostConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let g = config.world.grid_size;

        let mut world = Self {
            zones: vec![Zone::new(0, g - 2, g, g), Zone::new(0, 0, g, 2)],
            entities: Vec::with_capacity(config.world.max_entities),
            moves_left: config.world.total_moves,
            generation: 0,
            metrics: Metrics::new(),
            rng,
            config,
        };

        for _ in 0..world.config.world.initial_entities {
            let entity = Entity::new(&world.config.engine, &mut world.rng);
            world.place_randomly(entity);
        }
        tracing::info!(
            population = world.entities.len(),
            grid = g,
            fingerprint = %world.config.engine.fingerprint(),
            "World created"
        );
        Ok(world)
    }

    #[must_use]
    pub fn in_survive_zone(&self, x: i32, y: i32) -> bool {
        self.zones.iter().any(|zone| zone.contains(x, y))
    }

    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.entities.iter().any(|e| e.x == x && e.y == y)
    }

    /// Puts `entity` on a random free cell outside every survive zone.
    ///
    /// Returns `false` and drops the entity when no cell is found within the
    /// configured number of attempts.
    pub fn place_randomly(&mut self, mut entity: Entity) -> bool {
        let g = self.config.world.grid_size;
        let attempts = self.config.world.placement_attempts;
        for _ in 0..attempts {
            let x = self.rng.gen_range(0..g - 1);
            let y = self.rng.gen_range(0..g - 1);
            if self.in_survive_zone(x, y) || self.is_occupied(x, y) {
                continue;
            }
            entity.x = x;
            entity.y = y;
            self.entities.push(entity);
            return true;
        }
        tracing::warn!(id = %entity.id, attempts, "No free cell found, entity dropped");
        false
    }

    /// Total neurons and connections across the population.
    #[must_use]
    pub fn population_totals(&self) -> (usize, usize) {
        self.entities.iter().fold((0, 0), |(neurons, connections), e| {
            (
                neurons + e.agent.network().neuron_count(),
                connections + e.agent.network().edge_count(),
            )
        })
    }

    #[must_use]
    pub fn entity(&self, id: Uuid) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Detached copy of one entity's network, for inspection or export.
    #[must_use]
    pub fn snapshot_of(&self, id: Uuid) -> Option<NetworkSnapshot> {
        self.entity(id).map(|e| e.agent.snapshot())
    }
}
