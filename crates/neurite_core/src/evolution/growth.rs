use super::GrowthReport;
use crate::config::GrowthConfig;
use crate::network::NetworkLogic;
use neurite_data::{ActivationKind, Network, Neuron, NeuronId, NeuronKind};
use rand::Rng;

/// Adds `new_neurons` bare Middle neurons, then attempts `new_connections`
/// random edges.
///
/// Sources are drawn from the minted id range and rejected when absent or
/// Output; destinations are rejected when absent, Input or the source itself.
/// An attempt that runs out of tries is abandoned without touching the graph.
pub fn grow<R: Rng>(
    network: &mut Network,
    new_connections: usize,
    new_neurons: usize,
    config: &GrowthConfig,
    rng: &mut R,
) -> GrowthReport {
    let mut report = GrowthReport::default();

    for _ in 0..new_neurons {
        network.add_neuron(NeuronKind::Middle, ActivationKind::HyperbolicTangent);
        report.neurons_added += 1;
    }

    for _ in 0..new_connections {
        let Some(from) = pick_neuron(network, config.max_attempts, rng, |n| {
            n.kind != NeuronKind::Output
        }) else {
            tracing::trace!("No valid source found, abandoning connection");
            report.connections_abandoned += 1;
            continue;
        };
        let Some(to) = pick_neuron(network, config.max_attempts, rng, |n| {
            n.kind != NeuronKind::Input && n.id != from
        }) else {
            tracing::trace!(from, "No valid destination found, abandoning connection");
            report.connections_abandoned += 1;
            continue;
        };

        let weight = if config.weight_range > 0.0 {
            rng.gen_range(-config.weight_range..config.weight_range)
        } else {
            0.0
        };
        match network.connect(from, to, weight) {
            Ok(_) => report.connections_made += 1,
            Err(e) => {
                tracing::warn!(error = %e, "Growth picked an unknown neuron");
                report.connections_abandoned += 1;
            }
        }
    }

    report
}

fn pick_neuron<R: Rng>(
    network: &Network,
    attempts: usize,
    rng: &mut R,
    accept: impl Fn(&Neuron) -> bool,
) -> Option<NeuronId> {
    if network.next_neuron_id == 0 {
        return None;
    }
    (0..attempts).find_map(|_| {
        let id = rng.gen_range(0..network.next_neuron_id);
        network
            .neurons
            .get(&id)
            .filter(|n| accept(n))
            .map(|n| n.id)
    })
}
