use crate::activation::ActivationLogic;
use neurite_data::{Network, NeuronId};

/// One-hop fan-out recompute from `origin`.
///
/// Every neuron directly downstream of `origin` is recomputed from all of its
/// incoming edges. Downstream neurons of those neurons are left untouched; a
/// driver that needs deeper chains must call this from each root in order.
/// Edges to or from missing neurons are skipped, as are self-loops on
/// `origin`. Returns the number of neurons refreshed.
pub fn propagate_from(network: &mut Network, origin: NeuronId) -> usize {
    let Some(neuron) = network.neurons.get(&origin) else {
        return 0;
    };
    let targets: Vec<NeuronId> = neuron
        .outgoing
        .iter()
        .filter_map(|e| network.edges.get(e))
        .map(|edge| edge.to)
        .collect();

    let mut refreshed = 0;
    for target in targets {
        if target == origin {
            continue;
        }
        let Some(downstream) = network.neurons.get(&target) else {
            continue;
        };

        let sum: f64 = downstream
            .incoming
            .iter()
            .filter_map(|e| network.edges.get(e))
            .filter_map(|edge| {
                network
                    .neurons
                    .get(&edge.from)
                    .map(|source| source.value() * edge.weight())
            })
            .sum();
        let value = downstream.activation.apply(sum);

        if let Some(downstream) = network.neurons.get_mut(&target) {
            downstream.set_value(value);
            refreshed += 1;
        }
    }
    refreshed
}
