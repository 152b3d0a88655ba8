//! Output of a colony run.

use std::time::Duration;

use super::Tour;

/// The result of solving one instance.
///
/// Holds the best tour found across the whole run together with the
/// wall-clock time the run took and its per-generation convergence history.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_aco::models::{Solution, Tour};
///
/// let sol = Solution::new(Tour::new(vec![0, 1, 2, 3], 4.0), Duration::from_millis(250))
///     .with_history(vec![4.8, 4.0, 4.0]);
/// assert_eq!(sol.cost(), 4.0);
/// assert_eq!(sol.generations(), 3);
/// assert!((sol.elapsed_secs() - 0.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    tour: Tour,
    elapsed: Duration,
    evaluations: usize,
    history: Vec<f64>,
}

impl Solution {
    /// Creates a solution from the best tour and the elapsed run time.
    pub fn new(tour: Tour, elapsed: Duration) -> Self {
        Self {
            tour,
            elapsed,
            evaluations: 0,
            history: Vec::new(),
        }
    }

    /// Attaches the best-so-far cost recorded after each generation.
    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.history = history;
        self
    }

    /// Sets the number of tours that were constructed and evaluated.
    pub fn with_evaluations(mut self, evaluations: usize) -> Self {
        self.evaluations = evaluations;
        self
    }

    /// The best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Cost of the best tour, `+inf` if no tour was found.
    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Returns `true` if the run produced a tour.
    pub fn is_found(&self) -> bool {
        self.tour.is_found()
    }

    /// Wall-clock duration of the whole run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock duration in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of generations that were run.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Number of constructed tours.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Best-so-far cost after each generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}
