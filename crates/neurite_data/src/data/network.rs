use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable neuron identifier, never reused within one network.
pub type NeuronId = usize;
/// Stable edge identifier inside a network's edge arena.
pub type EdgeId = usize;

/// Clamps a value into the closed unit interval `[-1.0, 1.0]`.
///
/// NaN collapses to `0.0` so a poisoned sum cannot leak into stored state.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Role of a neuron in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeuronKind {
    /// External stimulus entry point (sensor channel).
    Input,
    /// External behaviour exit point (action channel).
    Output,
    /// Internal processing node created by growth.
    Middle,
}

/// Transform applied to a neuron's weighted input sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivationKind {
    /// Saturating curve, range (-1, 1).
    #[default]
    HyperbolicTangent,
    /// Ternary sign step: -1, 0 or +1.
    Threshold,
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// Unique identifier within the owning network.
    pub id: NeuronId,
    /// Role of the neuron.
    pub kind: NeuronKind,
    /// Activation bound at creation.
    pub activation: ActivationKind,
    /// Current value, always within `[-1.0, 1.0]`.
    value: f64,
    /// Edges leaving this neuron, one per distinct target.
    pub outgoing: Vec<EdgeId>,
    /// Edges entering this neuron, one per distinct source.
    pub incoming: Vec<EdgeId>,
}

impl Neuron {
    #[must_use]
    pub fn new(id: NeuronId, kind: NeuronKind, activation: ActivationKind) -> Self {
        Self {
            id,
            kind,
            activation,
            value: 0.0,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Stores `value` clamped to the unit interval.
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_unit(value);
    }
}

/// A directed, weighted edge stored once in the network's arena.
///
/// Both endpoints reference the same `EdgeId`, so the outgoing and incoming
/// views of an edge always agree on its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source neuron.
    pub from: NeuronId,
    /// Target neuron.
    pub to: NeuronId,
    /// Weight, always within `[-1.0, 1.0]`.
    weight: f64,
    /// Index the edge took in the source's outgoing list when created.
    pub outgoing_position: usize,
    /// Index the edge took in the target's incoming list when created.
    pub incoming_position: usize,
}

impl Edge {
    #[must_use]
    pub fn new(
        from: NeuronId,
        to: NeuronId,
        weight: f64,
        outgoing_position: usize,
        incoming_position: usize,
    ) -> Self {
        Self {
            from,
            to,
            weight: clamp_unit(weight),
            outgoing_position,
            incoming_position,
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Stores `weight` clamped to the unit interval.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = clamp_unit(weight);
    }
}

/// Per-endpoint read view of an edge.
///
/// Seen from the source it names the target, seen from the target it names
/// the source. `position` is a creation-order tag and is not kept valid as an
/// index after structural edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// The neighbour at the other end of the edge.
    pub neuron: NeuronId,
    /// Edge weight.
    pub weight: f64,
    /// Creation-order tag within the list this view came from.
    pub position: usize,
}

/// An identifier-addressed directed graph of neurons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// All live neurons.
    pub neurons: BTreeMap<NeuronId, Neuron>,
    /// Edge arena shared by both endpoint lists.
    pub edges: BTreeMap<EdgeId, Edge>,
    /// Input channels in binding order.
    pub inputs: Vec<NeuronId>,
    /// Output channels in binding order.
    pub outputs: Vec<NeuronId>,
    /// Next neuron id to mint.
    pub next_neuron_id: NeuronId,
    /// Next edge id to mint.
    pub next_edge_id: EdgeId,
}
