pub use neurite_core::{EvolutionLogic, NetworkLogic};
pub mod activation {
    pub use neurite_core::activation::*;
}
pub mod agent {
    pub use neurite_core::agent::*;
}
pub mod evolution {
    pub use neurite_core::evolution::*;
}
pub mod network {
    pub use neurite_core::network::*;
}
pub mod metrics {
    pub use neurite_core::metrics::*;
}

pub mod config;
pub mod entity;
pub mod world;
