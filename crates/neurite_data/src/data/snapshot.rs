//! Read-only copies of a network for visualisation.
//!
//! A snapshot owns its data; nothing written to it flows back into the
//! network it was taken from.

use super::network::{ActivationKind, Connection, NeuronId, NeuronKind};
use serde::{Deserialize, Serialize};

/// A neuron together with the per-endpoint views of its edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronSnapshot {
    pub id: NeuronId,
    pub kind: NeuronKind,
    pub activation: ActivationKind,
    pub value: f64,
    pub outgoing: Vec<Connection>,
    pub incoming: Vec<Connection>,
}

/// Whole-network view in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub neurons: Vec<NeuronSnapshot>,
    pub inputs: Vec<NeuronId>,
    pub outputs: Vec<NeuronId>,
}

impl NetworkSnapshot {
    #[must_use]
    pub fn neuron(&self, id: NeuronId) -> Option<&NeuronSnapshot> {
        self.neurons
            .binary_search_by_key(&id, |n| n.id)
            .ok()
            .map(|idx| &self.neurons[idx])
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.neurons.iter().map(|n| n.outgoing.len()).sum()
    }
}
