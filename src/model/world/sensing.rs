use crate::model::entity::Entity;
use neurite_core::Sensor;
use std::collections::HashSet;

/// Read-only view of the grid that every entity senses from within one tick.
pub struct Surroundings<'a> {
    pub grid_size: i32,
    pub occupied: &'a HashSet<(i32, i32)>,
    /// Fraction of the generation's move budget already spent.
    pub age: f64,
}

impl Surroundings<'_> {
    /// In bounds and not occupied by any entity.
    #[must_use]
    pub fn is_movable(&self, x: i32, y: i32) -> bool {
        (0..self.grid_size).contains(&x)
            && (0..self.grid_size).contains(&y)
            && !self.occupied.contains(&(x, y))
    }

    fn movable(&self, x: i32, y: i32) -> f64 {
        if self.is_movable(x, y) {
            1.0
        } else {
            0.0
        }
    }

    /// Every sensor value for `entity`, in binding order.
    #[must_use]
    pub fn readings(&self, entity: &Entity) -> [(Sensor, f64); 19] {
        let span = f64::from(self.grid_size - 1);
        let (x, y) = (entity.x, entity.y);
        let left = f64::from(x) / span;
        let right = 1.0 - left;
        let top = f64::from(y) / span;
        let bottom = 1.0 - top;

        [
            (Sensor::DistLeft, left),
            (Sensor::DistRight, right),
            (Sensor::DistTop, top),
            (Sensor::DistBottom, bottom),
            (Sensor::DistNearestWall, left.min(right).min(top).min(bottom)),
            (Sensor::LeftMovable, self.movable(x - 1, y)),
            (Sensor::RightMovable, self.movable(x + 1, y)),
            (Sensor::TopMovable, self.movable(x, y - 1)),
            (Sensor::BottomMovable, self.movable(x, y + 1)),
            (Sensor::TopLeftMovable, self.movable(x - 1, y - 1)),
            (Sensor::TopRightMovable, self.movable(x + 1, y - 1)),
            (Sensor::BottomLeftMovable, self.movable(x - 1, y + 1)),
            (Sensor::BottomRightMovable, self.movable(x + 1, y + 1)),
            (Sensor::Random, 0.0),
            (Sensor::Age, self.age),
            (Sensor::PreviousMoveHorz, entity.dx),
            (Sensor::PreviousMoveVert, entity.dy),
            (Sensor::Sensitivity, entity.sensitivity),
            (Sensor::Oscillator, 0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::EngineConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn value(readings: &[(Sensor, f64); 19], sensor: Sensor) -> f64 {
        readings
            .iter()
            .find(|(s, _)| *s == sensor)
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn test_readings_cover_every_sensor() {
        let occupied = HashSet::new();
        let view = Surroundings {
            grid_size: 32,
            occupied: &occupied,
            age: 0.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let entity = Entity::new(&EngineConfig::default(), &mut rng);
        let readings = view.readings(&entity);
        for (i, sensor) in Sensor::ALL.iter().enumerate() {
            assert_eq!(readings[i].0, *sensor);
        }
    }

    #[test]
    fn test_corner_distances_and_movability() {
        let mut occupied = HashSet::new();
        occupied.insert((31, 1));
        occupied.insert((31, 0));
        let view = Surroundings {
            grid_size: 32,
            occupied: &occupied,
            age: 0.5,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut entity = Entity::new(&EngineConfig::default(), &mut rng);
        entity.x = 31;
        entity.y = 0;
        let readings = view.readings(&entity);

        assert_eq!(value(&readings, Sensor::DistLeft), 1.0);
        assert_eq!(value(&readings, Sensor::DistRight), 0.0);
        assert_eq!(value(&readings, Sensor::DistNearestWall), 0.0);
        assert_eq!(value(&readings, Sensor::RightMovable), 0.0);
        assert_eq!(value(&readings, Sensor::TopMovable), 0.0);
        assert_eq!(value(&readings, Sensor::BottomMovable), 0.0);
        assert_eq!(value(&readings, Sensor::LeftMovable), 1.0);
        assert_eq!(value(&readings, Sensor::BottomLeftMovable), 1.0);
        assert_eq!(value(&readings, Sensor::Age), 0.5);
    }
}
