//! Structural evolution: random growth, reachability pruning and the
//! generational mutation pass.

pub mod growth;
pub mod mutation;
pub mod pruning;

use crate::config::EngineConfig;
use neurite_data::{Network, NeuronId};
use rand::Rng;
use std::collections::HashSet;

pub use growth::grow;
pub use mutation::mutate;
pub use pruning::is_connected_to_output;

/// What a [`grow`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthReport {
    pub neurons_added: usize,
    /// New edges plus reinforced existing ones.
    pub connections_made: usize,
    pub connections_abandoned: usize,
}

/// What a [`mutate`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationReport {
    /// Middle neurons slated for outright removal by the trial.
    pub slated: usize,
    /// Middle neurons pruned for not reaching an Output.
    pub pruned: usize,
    /// Middle neurons removed outright.
    pub removed: usize,
    /// Dangling edges dropped by the final sweep.
    pub swept: usize,
}

/// Trait defining the evolutionary operators on a [`Network`].
pub trait EvolutionLogic {
    fn grow<R: Rng>(
        &mut self,
        new_connections: usize,
        new_neurons: usize,
        config: &EngineConfig,
        rng: &mut R,
    ) -> GrowthReport;

    fn mutate<R: Rng>(&mut self, config: &EngineConfig, rng: &mut R) -> MutationReport;

    fn is_connected_to_output(&mut self, neuron: NeuronId, visited: &mut HashSet<NeuronId>)
        -> bool;
}

impl EvolutionLogic for Network {
    fn grow<R: Rng>(
        &mut self,
        new_connections: usize,
        new_neurons: usize,
        config: &EngineConfig,
        rng: &mut R,
    ) -> GrowthReport {
        growth::grow(self, new_connections, new_neurons, &config.growth, rng)
    }

    fn mutate<R: Rng>(&mut self, config: &EngineConfig, rng: &mut R) -> MutationReport {
        mutation::mutate(self, &config.mutation, rng)
    }

    fn is_connected_to_output(
        &mut self,
        neuron: NeuronId,
        visited: &mut HashSet<NeuronId>,
    ) -> bool {
        pruning::is_connected_to_output(self, neuron, visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MutationConfig;
    use crate::network::NetworkLogic;
    use neurite_data::{ActivationKind, NeuronKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn middle(network: &mut Network) -> NeuronId {
        network.add_neuron(NeuronKind::Middle, ActivationKind::HyperbolicTangent)
    }

    fn config_with_removal(removal_chance: f64) -> EngineConfig {
        EngineConfig {
            mutation: MutationConfig {
                removal_chance,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_grow_neurons_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut network = Network::default();
        let input = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        network.connect(input, output, 0.5).unwrap();
        let before = network.clone();

        let report = network.grow(0, 3, &EngineConfig::default(), &mut rng);

        assert_eq!(report.neurons_added, 3);
        assert_eq!(network.neuron_count(), before.neuron_count() + 3);
        assert_eq!(network.edges, before.edges);
        for (id, neuron) in &before.neurons {
            assert_eq!(network.neuron(*id), Some(neuron));
        }
        for id in before.next_neuron_id..network.next_neuron_id {
            let neuron = network.neuron(id).unwrap();
            assert_eq!(neuron.kind, NeuronKind::Middle);
            assert!(neuron.outgoing.is_empty() && neuron.incoming.is_empty());
        }
    }

    #[test]
    fn test_grow_respects_direction_rules() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut network = Network::default();
        for _ in 0..4 {
            network.add_input_channel();
        }
        for _ in 0..3 {
            network.add_output_channel(ActivationKind::Threshold);
        }
        let report = network.grow(200, 5, &EngineConfig::default(), &mut rng);
        assert!(report.connections_made > 0);

        for edge in network.edges.values() {
            assert_ne!(network.neuron(edge.from).unwrap().kind, NeuronKind::Output);
            assert_ne!(network.neuron(edge.to).unwrap().kind, NeuronKind::Input);
            assert!(edge.weight() >= -1.0 && edge.weight() <= 1.0);
        }
    }

    #[test]
    fn test_grow_abandons_without_valid_source() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut network = Network::default();
        network.add_output_channel(ActivationKind::Threshold);
        network.add_output_channel(ActivationKind::HyperbolicTangent);
        let before = network.clone();

        let report = network.grow(5, 0, &EngineConfig::default(), &mut rng);
        assert_eq!(report.connections_abandoned, 5);
        assert_eq!(network, before);

        let mut empty = Network::default();
        let report = empty.grow(2, 0, &EngineConfig::default(), &mut rng);
        assert_eq!(report.connections_abandoned, 2);
        assert_eq!(empty.edge_count(), 0);
    }

    #[test]
    fn test_grow_never_connects_a_neuron_to_itself() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut network = Network::default();
        middle(&mut network);

        let report = network.grow(1, 0, &EngineConfig::default(), &mut rng);
        assert_eq!(report.connections_made, 0);
        assert_eq!(report.connections_abandoned, 1);
        assert_eq!(network.edge_count(), 0);

        network.add_output_channel(ActivationKind::Threshold);
        network.grow(50, 3, &EngineConfig::default(), &mut rng);
        for edge in network.edges.values() {
            assert_ne!(edge.from, edge.to);
        }
    }

    #[test]
    fn test_grow_with_empty_weight_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut network = Network::default();
        let input = network.add_input_channel();
        network.add_output_channel(ActivationKind::Threshold);
        let mut config = EngineConfig::default();
        config.growth.weight_range = 0.0;

        let report = network.grow(1, 0, &config, &mut rng);
        assert_eq!(report.connections_made, 1);
        assert_eq!(network.outgoing(input)[0].weight, 0.0);
    }

    #[test]
    fn test_pruning_removes_dead_ends_only() {
        let mut network = Network::default();
        let input = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        let m1 = middle(&mut network);
        let m2 = middle(&mut network);
        let m3 = middle(&mut network);
        network.connect(input, m1, 0.5).unwrap();
        network.connect(m1, m2, 0.5).unwrap();
        network.connect(input, m3, 0.5).unwrap();
        network.connect(m3, output, 0.5).unwrap();

        let mut visited = HashSet::new();
        assert!(network.is_connected_to_output(input, &mut visited));
        assert!(network.neuron(m1).is_none());
        assert!(network.neuron(m2).is_none());
        assert!(network.neuron(m3).is_some());
        assert!(network.neuron(output).is_some());
        assert!(network.find_edge(input, m1).is_none());
        assert_eq!(network.outgoing(input).len(), 1);
    }

    #[test]
    fn test_pruning_skips_self_loops() {
        let mut network = Network::default();
        let input = network.add_input_channel();
        let m = middle(&mut network);
        network.connect(input, m, 1.0).unwrap();
        network.connect(m, m, 1.0).unwrap();

        let mut visited = HashSet::new();
        assert!(!network.is_connected_to_output(input, &mut visited));
        assert!(network.neuron(m).is_none());
    }

    #[test]
    fn test_visited_set_is_shared_across_inputs() {
        let mut network = Network::default();
        let i1 = network.add_input_channel();
        let i2 = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        let shared = middle(&mut network);
        let late = middle(&mut network);
        network.connect(i1, shared, 1.0).unwrap();
        network.connect(shared, output, 1.0).unwrap();
        network.connect(i2, late, 1.0).unwrap();
        network.connect(late, shared, 1.0).unwrap();

        let report = network.mutate(&config_with_removal(0.0), &mut ChaCha8Rng::seed_from_u64(0));

        // `shared` was already judged from i1, so `late` learns nothing from it.
        assert_eq!(report.pruned, 1);
        assert!(network.neuron(shared).is_some());
        assert!(network.neuron(late).is_none());
        assert!(network.dangling_edges().is_empty());
    }

    #[test]
    fn test_mutate_keeps_unreachable_middles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut network = Network::default();
        network.add_input_channel();
        network.add_output_channel(ActivationKind::Threshold);
        network.grow(0, 2, &EngineConfig::default(), &mut rng);

        let report = network.mutate(&config_with_removal(0.0), &mut rng);
        assert_eq!(report, MutationReport::default());
        assert_eq!(network.count_kind(NeuronKind::Middle), 2);
    }

    #[test]
    fn test_mutate_forced_removal() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut network = Network::default();
        let input = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        let m1 = middle(&mut network);
        let m2 = middle(&mut network);
        network.connect(input, m1, 0.5).unwrap();
        network.connect(m1, output, 0.5).unwrap();
        network.connect(input, m2, 0.5).unwrap();
        network.connect(m2, output, 0.5).unwrap();

        let report = network.mutate(&config_with_removal(1.0), &mut rng);

        assert_eq!(report.slated, 1);
        assert_eq!(report.removed, 1);
        assert_eq!(report.pruned, 0);
        assert_eq!(report.swept, 2);
        assert!(network.neuron(m1).is_none());
        assert!(network.neuron(m2).is_some());
        assert!(network.dangling_edges().is_empty());
        assert_eq!(network.outgoing(input).len(), 1);
        assert_eq!(network.incoming(output).len(), 1);
    }

    #[test]
    fn test_mutate_never_prunes_outputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut network = Network::default();
        let input = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        let dead = middle(&mut network);
        network.connect(input, dead, 0.5).unwrap();
        network.connect(input, output, 0.5).unwrap();

        network.mutate(&config_with_removal(0.0), &mut rng);
        assert!(network.neuron(output).is_some());
        assert_eq!(network.count_kind(NeuronKind::Output), 1);
    }

    #[test]
    fn test_search_stops_at_first_output() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut network = Network::default();
        let input = network.add_input_channel();
        let output = network.add_output_channel(ActivationKind::Threshold);
        let dead = middle(&mut network);
        network.connect(input, output, 0.5).unwrap();
        network.connect(input, dead, 0.5).unwrap();

        let report = network.mutate(&config_with_removal(0.0), &mut rng);

        // The Output edge comes first, so the dead end behind it is never judged.
        assert_eq!(report.pruned, 0);
        assert!(network.neuron(dead).is_some());
        assert!(network.find_edge(input, dead).is_some());
    }
}
