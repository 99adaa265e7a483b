//! Headless host for neurite agents: a grid world that runs a population
//! through generations of movement and survive-zone selection.

pub mod model;
