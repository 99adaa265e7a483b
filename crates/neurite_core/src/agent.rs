//! Named sensor/action façade over a privately owned [`Network`].

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::evolution::EvolutionLogic;
use crate::network::NetworkLogic;
use neurite_data::{
    Action, ActivationKind, EdgeId, Network, NetworkSnapshot, NeuronId, Sensor,
};
use rand::Rng;
use std::collections::BTreeMap;

/// Work done by one [`Agent::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// Input channels propagated from.
    pub roots: usize,
    /// Downstream neurons recomputed.
    pub refreshed: usize,
}

impl std::ops::AddAssign for PropagationStats {
    fn add_assign(&mut self, other: Self) {
        self.roots += other.roots;
        self.refreshed += other.refreshed;
    }
}

/// A network plus the fixed name→neuron bindings of its channels.
///
/// Bindings record the minted neuron id directly; nothing is inferred from
/// the order in which neurons were created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agent {
    network: Network,
    sensors: BTreeMap<Sensor, NeuronId>,
    actions: BTreeMap<Action, NeuronId>,
}

impl Agent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard layout: every [`Sensor`], then `MoveHorz` and `MoveVert`
    /// (threshold) and `SetSensitivity` (tanh), then the initial random growth.
    /// `MoveForward` is left unbound.
    pub fn with_default_layout<R: Rng>(config: &EngineConfig, rng: &mut R) -> Self {
        let mut agent = Self::new();
        for sensor in Sensor::ALL {
            let id = agent.network.add_input_channel();
            agent.sensors.insert(sensor, id);
        }
        for (action, activation) in [
            (Action::MoveHorz, ActivationKind::Threshold),
            (Action::MoveVert, ActivationKind::Threshold),
            (Action::SetSensitivity, ActivationKind::HyperbolicTangent),
        ] {
            let id = agent.network.add_output_channel(activation);
            agent.actions.insert(action, id);
        }
        agent.network.grow(
            config.reproduction.initial_connections,
            config.reproduction.initial_neurons,
            config,
            rng,
        );
        agent
    }

    pub fn bind_sensor(&mut self, sensor: Sensor) -> Result<NeuronId> {
        if self.sensors.contains_key(&sensor) {
            return Err(EngineError::AlreadyBound(format!("{sensor:?}")));
        }
        let id = self.network.add_input_channel();
        self.sensors.insert(sensor, id);
        Ok(id)
    }

    pub fn bind_action(&mut self, action: Action, activation: ActivationKind) -> Result<NeuronId> {
        if self.actions.contains_key(&action) {
            return Err(EngineError::AlreadyBound(format!("{action:?}")));
        }
        let id = self.network.add_output_channel(activation);
        self.actions.insert(action, id);
        Ok(id)
    }

    #[must_use]
    pub fn sensor_id(&self, sensor: Sensor) -> Option<NeuronId> {
        self.sensors.get(&sensor).copied()
    }

    #[must_use]
    pub fn action_id(&self, action: Action) -> Option<NeuronId> {
        self.actions.get(&action).copied()
    }

    /// Writes a sensor value, clamped to `[-1.0, 1.0]`.
    pub fn set_sensor(&mut self, sensor: Sensor, value: f64) -> Result<()> {
        let id = self
            .sensor_id(sensor)
            .ok_or(EngineError::UnboundSensor(sensor))?;
        self.network
            .neuron_mut(id)
            .ok_or(EngineError::UnknownNeuron(id))?
            .set_value(value);
        Ok(())
    }

    pub fn sensor(&self, sensor: Sensor) -> Result<f64> {
        let id = self
            .sensor_id(sensor)
            .ok_or(EngineError::UnboundSensor(sensor))?;
        self.value_of(id)
    }

    pub fn action(&self, action: Action) -> Result<f64> {
        let id = self
            .action_id(action)
            .ok_or(EngineError::UnboundAction(action))?;
        self.value_of(id)
    }

    fn value_of(&self, id: NeuronId) -> Result<f64> {
        self.network
            .neuron(id)
            .map(|n| n.value())
            .ok_or(EngineError::UnknownNeuron(id))
    }

    pub fn connect(&mut self, from: NeuronId, to: NeuronId, weight: f64) -> Result<EdgeId> {
        self.network.connect(from, to, weight)
    }

    /// Propagates one hop from every input channel, in channel order.
    pub fn update(&mut self) -> PropagationStats {
        let mut stats = PropagationStats::default();
        for idx in 0..self.network.inputs.len() {
            let id = self.network.inputs[idx];
            stats.refreshed += self.network.propagate_from(id);
            stats.roots += 1;
        }
        stats
    }

    /// Clone + one growth step + one mutation pass.
    ///
    /// The child's bindings are copied verbatim; its network is an independent
    /// deep copy, so nothing done to the child reaches `self`.
    pub fn reproduce<R: Rng>(&self, config: &EngineConfig, rng: &mut R) -> Agent {
        let mut network = Network::default();
        self.network.clone_into(&mut network);
        let mut child = Agent {
            network,
            sensors: self.sensors.clone(),
            actions: self.actions.clone(),
        };

        let growth = if rng.gen::<f64>() < config.reproduction.connection_bias {
            child.network.grow(1, 0, config, rng)
        } else {
            child.network.grow(0, 1, config, rng)
        };
        let mutation = child.network.mutate(config, rng);

        tracing::debug!(
            neurons = child.network.neuron_count(),
            connections = child.network.edge_count(),
            grown_neurons = growth.neurons_added,
            grown_connections = growth.connections_made,
            pruned = mutation.pruned,
            removed = mutation.removed,
            "Agent reproduced"
        );
        child
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[must_use]
    pub fn snapshot(&self) -> NetworkSnapshot {
        self.network.snapshot()
    }
}
