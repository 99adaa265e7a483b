//! # Neurite Core
//!
//! The engine behind neurite: an identifier-addressed graph of neurons that
//! propagates values on demand and evolves by random growth, reachability
//! pruning and asexual reproduction.
//!
//! This crate contains:
//! - Activation transforms (tanh and ternary threshold)
//! - Graph construction, one-hop propagation and snapshots (`NetworkLogic`)
//! - The named sensor/action façade (`Agent`)
//! - Growth, pruning, mutation and reproduction (`EvolutionLogic`)
//! - Configuration, errors and run metrics
//!
//! ## Example
//!
//! ```
//! use neurite_core::config::EngineConfig;
//! use neurite_core::{Action, Agent, Sensor};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = EngineConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut agent = Agent::with_default_layout(&config, &mut rng);
//!
//! agent.set_sensor(Sensor::DistLeft, 0.25).unwrap();
//! agent.update();
//! let dx = agent.action(Action::MoveHorz).unwrap();
//! assert!((-1.0..=1.0).contains(&dx));
//!
//! let child = agent.reproduce(&config, &mut rng);
//! assert_eq!(child.sensor_id(Sensor::Age), agent.sensor_id(Sensor::Age));
//! ```

/// Activation transforms
pub mod activation;
/// Named sensor/action façade
pub mod agent;
/// Configuration for growth, mutation and reproduction
pub mod config;
/// Engine error types
pub mod error;
/// Growth, pruning and mutation
pub mod evolution;
/// Run counters and logging setup
pub mod metrics;
/// Graph construction, propagation and snapshots
pub mod network;

pub use activation::ActivationLogic;
pub use agent::{Agent, PropagationStats};
pub use error::EngineError;
pub use evolution::{EvolutionLogic, GrowthReport, MutationReport};
pub use metrics::{init_logging, Metrics};
pub use network::NetworkLogic;
pub use neurite_data::{
    Action, ActivationKind, Connection, Network, NetworkSnapshot, Neuron, NeuronId, NeuronKind,
    Sensor,
};
