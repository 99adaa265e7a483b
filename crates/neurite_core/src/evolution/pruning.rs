use crate::network::NetworkLogic;
use neurite_data::{EdgeId, Network, NeuronId, NeuronKind};
use std::collections::HashSet;

/// Depth-first search from `neuron` along outgoing edges for any Output.
///
/// Reaching an Output succeeds at once. An unvisited Middle neuron is marked
/// and searched; if that search fails the Middle neuron is deleted and the
/// edge to it detached. Middle neurons already in `visited` are skipped, so
/// a set shared across several roots means each Middle neuron is judged at
/// most once. Self-loops, missing targets and Input targets are ignored.
pub fn is_connected_to_output(
    network: &mut Network,
    neuron: NeuronId,
    visited: &mut HashSet<NeuronId>,
) -> bool {
    let Some(origin) = network.neuron(neuron) else {
        return false;
    };
    let edges: Vec<EdgeId> = origin.outgoing.clone();

    for edge_id in edges {
        let Some(target) = network.edges.get(&edge_id).map(|e| e.to) else {
            continue;
        };
        if target == neuron {
            continue;
        }
        let Some(kind) = network.neuron(target).map(|n| n.kind) else {
            continue;
        };

        match kind {
            NeuronKind::Output => return true,
            NeuronKind::Middle => {
                if !visited.insert(target) {
                    continue;
                }
                if is_connected_to_output(network, target, visited) {
                    return true;
                }
                network.remove_neuron(target);
                network.detach_edge(edge_id);
            }
            NeuronKind::Input => {}
        }
    }
    false
}
