//! Ant Colony Optimization engine.
//!
//! - [`Visibility`] — static inverse-cost desirability, built once per instance
//! - [`PheromoneMatrix`] / [`DeltaMatrix`] — shared adaptive desirability and
//!   its per-generation deposit buffer
//! - [`construct_tour`] — one ant's roulette-wheel walk
//! - [`Colony`] — generation loop: construct, deposit, evaporate, track best
//! - [`AcoEngine`] — full run over one instance, timed
//! - [`RandomSource`] — injected randomness ([`ScriptedSource`] for replay)

mod config;
mod construct;
mod controller;
mod engine;
mod pheromone;
mod random;
mod visibility;

pub use config::AcoConfig;
pub use construct::{construct_tour, select_next, Ant};
pub use controller::{Colony, GenerationStats};
pub use engine::AcoEngine;
pub use pheromone::{DeltaMatrix, PheromoneMatrix, BOOTSTRAP_TOURS, PHEROMONE_FLOOR};
pub use random::{RandomSource, ScriptedSource};
pub use visibility::Visibility;
