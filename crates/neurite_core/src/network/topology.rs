use crate::error::{EngineError, Result};
use neurite_data::{
    ActivationKind, Connection, Edge, EdgeId, Network, Neuron, NeuronId, NeuronKind,
    NetworkSnapshot, NeuronSnapshot,
};

pub fn add_neuron(network: &mut Network, kind: NeuronKind, activation: ActivationKind) -> NeuronId {
    let id = network.next_neuron_id;
    network.next_neuron_id += 1;
    network.neurons.insert(id, Neuron::new(id, kind, activation));
    id
}

pub fn add_input_channel(network: &mut Network) -> NeuronId {
    let id = add_neuron(network, NeuronKind::Input, ActivationKind::HyperbolicTangent);
    network.inputs.push(id);
    id
}

pub fn add_output_channel(network: &mut Network, activation: ActivationKind) -> NeuronId {
    let id = add_neuron(network, NeuronKind::Output, activation);
    network.outputs.push(id);
    id
}

/// The edge `from -> to`, if one is recorded in `from`'s outgoing list.
pub fn find_edge(network: &Network, from: NeuronId, to: NeuronId) -> Option<EdgeId> {
    let source = network.neurons.get(&from)?;
    source
        .outgoing
        .iter()
        .copied()
        .find(|edge_id| network.edges.get(edge_id).is_some_and(|e| e.to == to))
}

/// Single entry point for edge creation.
///
/// An existing `from -> to` edge absorbs `weight` into its current weight;
/// otherwise a new edge is appended to both endpoint lists.
pub fn connect(network: &mut Network, from: NeuronId, to: NeuronId, weight: f64) -> Result<EdgeId> {
    for id in [from, to] {
        if !network.neurons.contains_key(&id) {
            return Err(EngineError::UnknownNeuron(id));
        }
    }
    if let Some(edge_id) = find_edge(network, from, to) {
        if let Some(edge) = network.edges.get_mut(&edge_id) {
            edge.set_weight(edge.weight() + weight);
        }
        return Ok(edge_id);
    }

    let outgoing_position = network.neurons.get(&from).map_or(0, |n| n.outgoing.len());
    let incoming_position = network.neurons.get(&to).map_or(0, |n| n.incoming.len());

    let edge_id = network.next_edge_id;
    network.next_edge_id += 1;
    network.edges.insert(
        edge_id,
        Edge::new(from, to, weight, outgoing_position, incoming_position),
    );

    if let Some(source) = network.neurons.get_mut(&from) {
        source.outgoing.push(edge_id);
    }
    if let Some(target) = network.neurons.get_mut(&to) {
        target.incoming.push(edge_id);
    }
    Ok(edge_id)
}

/// Removes the neuron only. Edges that reference it stay behind until
/// [`sweep_dangling`] runs.
pub fn remove_neuron(network: &mut Network, id: NeuronId) -> Option<Neuron> {
    network.neurons.remove(&id)
}

/// Removes one edge from the arena and from whichever endpoint lists still exist.
pub fn detach_edge(network: &mut Network, edge_id: EdgeId) -> Option<Edge> {
    let edge = network.edges.remove(&edge_id)?;
    if let Some(source) = network.neurons.get_mut(&edge.from) {
        source.outgoing.retain(|&e| e != edge_id);
    }
    if let Some(target) = network.neurons.get_mut(&edge.to) {
        target.incoming.retain(|&e| e != edge_id);
    }
    Some(edge)
}

/// Edges in the arena with at least one endpoint that no longer exists.
pub fn dangling_edges(network: &Network) -> Vec<EdgeId> {
    network
        .edges
        .iter()
        .filter(|(_, e)| {
            !network.neurons.contains_key(&e.from) || !network.neurons.contains_key(&e.to)
        })
        .map(|(&id, _)| id)
        .collect()
}

/// Drops every dangling edge from the arena and from every live neuron's
/// lists. Returns how many edges were dropped.
pub fn sweep_dangling(network: &mut Network) -> usize {
    let dangling = dangling_edges(network);
    for edge_id in &dangling {
        network.edges.remove(edge_id);
    }

    let edges = &network.edges;
    for neuron in network.neurons.values_mut() {
        neuron.outgoing.retain(|e| edges.contains_key(e));
        neuron.incoming.retain(|e| edges.contains_key(e));
    }
    dangling.len()
}

pub fn outgoing(network: &Network, id: NeuronId) -> Vec<Connection> {
    let Some(neuron) = network.neurons.get(&id) else {
        return Vec::new();
    };
    neuron
        .outgoing
        .iter()
        .filter_map(|e| network.edges.get(e))
        .map(|edge| Connection {
            neuron: edge.to,
            weight: edge.weight(),
            position: edge.outgoing_position,
        })
        .collect()
}

pub fn incoming(network: &Network, id: NeuronId) -> Vec<Connection> {
    let Some(neuron) = network.neurons.get(&id) else {
        return Vec::new();
    };
    neuron
        .incoming
        .iter()
        .filter_map(|e| network.edges.get(e))
        .map(|edge| Connection {
            neuron: edge.from,
            weight: edge.weight(),
            position: edge.incoming_position,
        })
        .collect()
}

pub fn snapshot(network: &Network) -> NetworkSnapshot {
    NetworkSnapshot {
        neurons: network
            .neurons
            .values()
            .map(|n| NeuronSnapshot {
                id: n.id,
                kind: n.kind,
                activation: n.activation,
                value: n.value(),
                outgoing: outgoing(network, n.id),
                incoming: incoming(network, n.id),
            })
            .collect(),
        inputs: network.inputs.clone(),
        outputs: network.outputs.clone(),
    }
}
