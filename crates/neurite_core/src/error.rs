//! Error types for neurite_core.
//!
//! Most graph anomalies degrade silently (see the propagation and sweep
//! paths). The variants here cover caller mistakes: addressing a neuron that
//! was never minted, or a sensor/action name that was never bound.

use neurite_data::{Action, NeuronId, Sensor};
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// An operation named a neuron that is not in the network.
    #[error("Unknown neuron: {0}")]
    UnknownNeuron(NeuronId),

    /// A sensor was read or written before being bound.
    #[error("Sensor not bound: {0:?}")]
    UnboundSensor(Sensor),

    /// An action was read before being bound.
    #[error("Action not bound: {0:?}")]
    UnboundAction(Action),

    /// A sensor or action name was bound twice.
    #[error("Channel already bound: {0}")]
    AlreadyBound(String),
}

/// Result type alias for neurite_core operations.
pub type Result<T> = std::result::Result<T, EngineError>;
