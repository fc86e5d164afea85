//! Core driver types: the random source and drill configuration.

pub mod config;
pub mod rng;

pub use config::DrillConfig;
pub use rng::WordRng;
