use super::pruning::is_connected_to_output;
use super::MutationReport;
use crate::config::MutationConfig;
use crate::network::NetworkLogic;
use neurite_data::{Network, NeuronId, NeuronKind};
use rand::Rng;
use std::collections::HashSet;

/// One generational mutation pass.
///
/// 1. A single trial decides whether `max_removals` Middle neurons are slated.
/// 2. Every Input channel is searched for a path to an Output; dead-end Middle
///    neurons are pruned. One visited set spans all of these searches.
/// 3. Slated Middle neurons are deleted in id order, reachable or not.
/// 4. Dangling edges left by steps 2 and 3 are swept.
pub fn mutate<R: Rng>(network: &mut Network, config: &MutationConfig, rng: &mut R) -> MutationReport {
    let slated = if rng.gen::<f64>() < config.removal_chance {
        config.max_removals
    } else {
        0
    };

    let before = network.neuron_count();
    let mut visited = HashSet::new();
    let roots: Vec<NeuronId> = network.inputs.clone();
    for id in roots {
        if network
            .neuron(id)
            .is_some_and(|n| n.kind == NeuronKind::Input)
        {
            is_connected_to_output(network, id, &mut visited);
        }
    }
    let pruned = before - network.neuron_count();

    let doomed: Vec<NeuronId> = network
        .neurons
        .values()
        .filter(|n| n.kind == NeuronKind::Middle)
        .map(|n| n.id)
        .take(slated)
        .collect();
    for &id in &doomed {
        network.remove_neuron(id);
    }

    let swept = network.sweep_dangling();

    let report = MutationReport {
        slated,
        pruned,
        removed: doomed.len(),
        swept,
    };
    tracing::debug!(
        slated = report.slated,
        pruned = report.pruned,
        removed = report.removed,
        swept = report.swept,
        "Network mutated"
    );
    report
}
