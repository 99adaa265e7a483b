pub mod propagate;
pub mod topology;

use crate::error::Result;
pub use neurite_data::{
    ActivationKind, Connection, Edge, EdgeId, Network, NetworkSnapshot, Neuron, NeuronId,
    NeuronKind,
};

/// Trait defining graph construction, lookup and propagation for [`Network`].
///
/// Deep copies go through `Clone`: `source.clone_into(&mut target)` replaces
/// every neuron, edge and channel list of `target` with independent copies.
pub trait NetworkLogic {
    fn add_neuron(&mut self, kind: NeuronKind, activation: ActivationKind) -> NeuronId;
    fn add_input_channel(&mut self) -> NeuronId;
    fn add_output_channel(&mut self, activation: ActivationKind) -> NeuronId;

    fn neuron(&self, id: NeuronId) -> Option<&Neuron>;
    fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron>;
    fn find_edge(&self, from: NeuronId, to: NeuronId) -> Option<EdgeId>;
    fn outgoing(&self, id: NeuronId) -> Vec<Connection>;
    fn incoming(&self, id: NeuronId) -> Vec<Connection>;

    fn connect(&mut self, from: NeuronId, to: NeuronId, weight: f64) -> Result<EdgeId>;
    fn remove_neuron(&mut self, id: NeuronId) -> Option<Neuron>;
    fn detach_edge(&mut self, edge: EdgeId) -> Option<Edge>;
    fn dangling_edges(&self) -> Vec<EdgeId>;
    fn sweep_dangling(&mut self) -> usize;

    fn propagate_from(&mut self, origin: NeuronId) -> usize;
    #[must_use]
    fn snapshot(&self) -> NetworkSnapshot;

    fn neuron_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn count_kind(&self, kind: NeuronKind) -> usize;
}

impl NetworkLogic for Network {
    fn add_neuron(&mut self, kind: NeuronKind, activation: ActivationKind) -> NeuronId {
        topology::add_neuron(self, kind, activation)
    }

    fn add_input_channel(&mut self) -> NeuronId {
        topology::add_input_channel(self)
    }

    fn add_output_channel(&mut self, activation: ActivationKind) -> NeuronId {
        topology::add_output_channel(self, activation)
    }

    fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(&id)
    }

    fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron> {
        self.neurons.get_mut(&id)
    }

    fn find_edge(&self, from: NeuronId, to: NeuronId) -> Option<EdgeId> {
        topology::find_edge(self, from, to)
    }

    fn outgoing(&self, id: NeuronId) -> Vec<Connection> {
        topology::outgoing(self, id)
    }

    fn incoming(&self, id: NeuronId) -> Vec<Connection> {
        topology::incoming(self, id)
    }

    fn connect(&mut self, from: NeuronId, to: NeuronId, weight: f64) -> Result<EdgeId> {
        topology::connect(self, from, to, weight)
    }

    fn remove_neuron(&mut self, id: NeuronId) -> Option<Neuron> {
        topology::remove_neuron(self, id)
    }

    fn detach_edge(&mut self, edge: EdgeId) -> Option<Edge> {
        topology::detach_edge(self, edge)
    }

    fn dangling_edges(&self) -> Vec<EdgeId> {
        topology::dangling_edges(self)
    }

    fn sweep_dangling(&mut self) -> usize {
        topology::sweep_dangling(self)
    }

    fn propagate_from(&mut self, origin: NeuronId) -> usize {
        propagate::propagate_from(self, origin)
    }

    fn snapshot(&self) -> NetworkSnapshot {
        topology::snapshot(self)
    }

    fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn count_kind(&self, kind: NeuronKind) -> usize {
        self.neurons.values().filter(|n| n.kind == kind).count()
    }
}
