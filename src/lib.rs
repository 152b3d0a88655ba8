//! # u-aco
//!
//! Traveling salesman tours via Ant Colony Optimization. A colony of ants
//! repeatedly builds tours guided by a shared pheromone matrix, which is
//! evaporated and reinforced by the tours' inverse cost once per generation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, Solution)
//! - [`distance`] — Dense cost matrix
//! - [`colony`] — The ACO engine: visibility, pheromone, construction, generations
//! - [`io`] — Instance files, run configuration, reports
//! - [`error`] — Error type shared by all of the above

pub mod colony;
pub mod distance;
pub mod error;
pub mod io;
pub mod models;

pub use colony::{AcoConfig, AcoEngine};
pub use error::{AcoError, AcoResult};
