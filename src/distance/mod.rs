//! Travel cost between cities.
//!
//! A dense cost matrix is the only cost provider the colony reads; it is
//! built either from city coordinates (Euclidean) or from explicit costs.

mod matrix;

pub use matrix::DistanceMatrix;
