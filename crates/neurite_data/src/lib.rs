//! Plain data records for the neurite engine.
//!
//! Everything here is inert state: neurons, edges, the network that owns
//! them, the sensor/action vocabularies and the read-only snapshot views.
//! Behaviour lives in `neurite_core`.

pub mod data;

pub use data::channel::{Action, Sensor};
pub use data::network::{
    clamp_unit, ActivationKind, Connection, Edge, EdgeId, Network, Neuron, NeuronId, NeuronKind,
};
pub use data::snapshot::{NetworkSnapshot, NeuronSnapshot};
