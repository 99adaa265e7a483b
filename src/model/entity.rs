use crate::model::agent::Agent;
use crate::model::config::EngineConfig;
use neurite_core::Action;
use rand::Rng;
use uuid::Uuid;

/// Axis-aligned band of the grid; containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Zone {
    #[must_use]
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && y >= self.min_y && x <= self.max_x && y <= self.max_y
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub x: i32,
    pub y: i32,
    pub agent: Agent,
    /// Last `SetSensitivity` output, fed back as a sensor next tick.
    pub sensitivity: f64,
    /// Last `MoveHorz` output.
    pub dx: f64,
    /// Last `MoveVert` output.
    pub dy: f64,
    pub generation: u32,
}

impl Entity {
    pub fn new<R: Rng>(config: &EngineConfig, rng: &mut R) -> Self {
        let agent = Agent::with_default_layout(config, rng);
        Self {
            id: Uuid::from_u128(rng.gen()),
            parent_id: None,
            x: 0,
            y: 0,
            agent,
            sensitivity: 0.0,
            dx: 0.0,
            dy: 0.0,
            generation: 0,
        }
    }

    /// Child with a reproduced agent; position is assigned on placement.
    pub fn reproduce<R: Rng>(&self, config: &EngineConfig, rng: &mut R) -> Self {
        let agent = self.agent.reproduce(config, rng);
        Self {
            id: Uuid::from_u128(rng.gen()),
            parent_id: Some(self.id),
            x: self.x,
            y: self.y,
            agent,
            sensitivity: self.sensitivity,
            dx: self.dx,
            dy: self.dy,
            generation: self.generation + 1,
        }
    }

    /// Reads the movement and sensitivity outputs after an update.
    pub fn read_actions(&mut self) -> anyhow::Result<()> {
        self.dx = self.agent.action(Action::MoveHorz)?;
        self.dy = self.agent.action(Action::MoveVert)?;
        self.sensitivity = self.agent.action(Action::SetSensitivity)?;
        Ok(())
    }

    /// Grid step requested by the last outputs, one of `-1`, `0` or `1` per axis.
    #[must_use]
    pub fn step(&self) -> (i32, i32) {
        (self.dx.round() as i32, self.dy.round() as i32)
    }
}
