use crate::model::entity::Entity;
use crate::model::world::{GenerationSummary, TickOutcome, World};
use rand::Rng;
use std::time::Instant;

impl World {
    /// Selection and refill at a generation boundary.
    ///
    /// Entities standing in a survive zone are kept and scattered again; each
    /// of them may leave one child while there is room. A generation with no
    /// survivors is reseeded with fresh default agents.
    pub fn next_generation(&mut self) -> GenerationSummary {
        let start = Instant::now();
        let previous = std::mem::take(&mut self.entities);
        let survivors: Vec<Entity> = previous
            .into_iter()
            .filter(|e| self.in_survive_zone(e.x, e.y))
            .collect();
        let survivor_count = survivors.len();
        for entity in survivors {
            self.place_randomly(entity);
        }

        // Children placed in this loop do not reproduce themselves.
        let parents = self.entities.len();
        for idx in 0..parents {
            if self.rng.gen::<f64>() < self.config.world.reproduce_chance
                && self.entities.len() < self.config.world.max_entities
            {
                let child = self.entities[idx].reproduce(&self.config.engine, &mut self.rng);
                self.place_randomly(child);
            }
        }

        if self.entities.is_empty() {
            tracing::info!(
                count = self.config.world.reseed_count,
                "Population extinct, reseeding"
            );
            for _ in 0..self.config.world.reseed_count {
                let entity = Entity::new(&self.config.engine, &mut self.rng);
                self.place_randomly(entity);
            }
        }

        self.generation += 1;
        self.moves_left = self.config.world.total_moves;
        self.metrics
            .record_generation(survivor_count, self.entities.len(), start.elapsed());

        let (neurons, connections) = self.population_totals();
        GenerationSummary {
            generation: self.generation,
            survivors: survivor_count,
            population: self.entities.len(),
            neurons,
            connections,
        }
    }

    /// Ticks until the move budget is spent, then starts the next generation.
    pub fn run_generation(&mut self) -> anyhow::Result<GenerationSummary> {
        while self.tick()? == TickOutcome::Running {}
        Ok(self.next_generation())
    }
}
