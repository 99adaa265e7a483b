use crate::model::agent::PropagationStats;
use crate::model::world::sensing::Surroundings;
use crate::model::world::{TickOutcome, World};
use rayon::prelude::*;
use std::collections::HashSet;

impl World {
    /// Advances the population by one move.
    ///
    /// Every entity senses the same pre-move grid, all agents update in
    /// parallel, then moves are applied one entity at a time. A move into an
    /// occupied cell is reverted.
    pub fn tick(&mut self) -> anyhow::Result<TickOutcome> {
        if self.moves_left == 0 {
            return Ok(TickOutcome::GenerationEnded);
        }
        let g = self.config.world.grid_size;
        let total = self.config.world.total_moves;

        let mut occupied: HashSet<(i32, i32)> =
            self.entities.iter().map(|e| (e.x, e.y)).collect();
        let readings: Vec<_> = {
            let view = Surroundings {
                grid_size: g,
                occupied: &occupied,
                age: f64::from(total - self.moves_left) / f64::from(total),
            };
            self.entities.iter().map(|e| view.readings(e)).collect()
        };

        let per_entity = self
            .entities
            .par_iter_mut()
            .zip(readings.par_iter())
            .map(|(entity, readings)| -> anyhow::Result<PropagationStats> {
                for &(sensor, value) in readings {
                    entity.agent.set_sensor(sensor, value)?;
                }
                let stats = entity.agent.update();
                entity.read_actions()?;
                Ok(stats)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut stats = PropagationStats::default();
        for s in per_entity {
            stats += s;
        }

        for entity in &mut self.entities {
            let (sx, sy) = entity.step();
            let target = ((entity.x + sx).clamp(0, g - 1), (entity.y + sy).clamp(0, g - 1));
            if target == (entity.x, entity.y) || occupied.contains(&target) {
                continue;
            }
            occupied.remove(&(entity.x, entity.y));
            occupied.insert(target);
            (entity.x, entity.y) = target;
        }

        self.moves_left -= 1;
        self.metrics.record_tick(stats, self.entities.len());

        if self.moves_left == 0 {
            Ok(TickOutcome::GenerationEnded)
        } else {
            Ok(TickOutcome::Running)
        }
    }
}
