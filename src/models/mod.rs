//! Domain model types for tour construction.
//!
//! Cities are plain 2-D points, a [`Tour`] is a closed permutation of city
//! indices with its cost, and a [`Solution`] is what a colony run reports.

mod city;
mod solution;
mod tour;

pub use city::City;
pub use solution::Solution;
pub use tour::Tour;

pub(crate) use tour::closed_edges;
