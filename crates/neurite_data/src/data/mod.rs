//! Core data structures for the neurite engine.

pub mod channel;
pub mod network;
pub mod snapshot;
