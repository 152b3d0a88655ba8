//! One colony generation after another, for a single instance.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::AcoResult;
use crate::models::Tour;

use super::config::AcoConfig;
use super::construct::construct_tour;
use super::pheromone::{DeltaMatrix, PheromoneMatrix};
use super::random::RandomSource;
use super::visibility::Visibility;

/// Summary of one finished generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Cheapest tour built in this generation (`+inf` with no ants).
    pub generation_best: f64,
    /// Best-so-far cost after this generation.
    pub best_cost: f64,
}

/// Runs generations of ants over one instance.
///
/// The pheromone matrix is borrowed for the lifetime of the colony. It is
/// read while ants construct tours and written exactly once per
/// generation, after the last ant has finished.
pub struct Colony<'a> {
    distances: &'a DistanceMatrix,
    visibility: &'a Visibility,
    pheromone: &'a mut PheromoneMatrix,
    config: &'a AcoConfig,
    delta: DeltaMatrix,
    best: Tour,
    history: Vec<f64>,
    evaluations: usize,
}

impl<'a> Colony<'a> {
    /// Creates a colony. Requires at least two cities and matrices of
    /// matching size.
    pub fn new(
        distances: &'a DistanceMatrix,
        visibility: &'a Visibility,
        pheromone: &'a mut PheromoneMatrix,
        config: &'a AcoConfig,
    ) -> Self {
        let n = distances.size();
        debug_assert!(n >= 2);
        debug_assert_eq!(visibility.size(), n);
        debug_assert_eq!(pheromone.size(), n);
        Self {
            distances,
            visibility,
            pheromone,
            config,
            delta: DeltaMatrix::new(n),
            best: Tour::unfound(),
            history: Vec::new(),
            evaluations: 0,
        }
    }

    /// Runs one generation: every ant builds a tour against the current
    /// pheromone snapshot, deposits go to the delta buffer, then the
    /// matrix is evaporated and reinforced.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> AcoResult<GenerationStats> {
        let n = self.distances.size();
        let AcoConfig {
            alpha,
            beta,
            rho,
            num_ants,
            step_deposit,
            ..
        } = *self.config;

        self.delta.reset();
        let mut generation_best = f64::INFINITY;

        for _ in 0..num_ants {
            let start = rng.next_index(n);
            let order = construct_tour(start, &*self.pheromone, self.visibility, alpha, beta, rng)?;
            let cost = self.distances.tour_cost(&order);

            self.delta.deposit_tour(&order, 1.0 / cost);
            if step_deposit {
                for pair in order.windows(2) {
                    let edge = self.distances.get(pair[0], pair[1]);
                    self.delta.deposit_edge(pair[0], pair[1], 1.0 / edge);
                }
            }
            self.evaluations += 1;

            generation_best = generation_best.min(cost);
            let tour = Tour::new(order, cost);
            if tour.is_better_than(&self.best) {
                self.best = tour;
            }
        }

        self.pheromone.apply(&self.delta, rho);
        self.history.push(self.best.cost());

        let stats = GenerationStats {
            generation: self.history.len(),
            generation_best,
            best_cost: self.best.cost(),
        };
        debug!(
            "generation {}: generation best {:.6}, best so far {:.6}",
            stats.generation, stats.generation_best, stats.best_cost
        );
        Ok(stats)
    }

    /// Runs a fixed number of generations. There is no early stop.
    pub fn run<R: RandomSource + ?Sized>(&mut self, generations: usize, rng: &mut R) -> AcoResult<()> {
        for _ in 0..generations {
            self.step(rng)?;
        }
        Ok(())
    }

    /// Current pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &*self.pheromone
    }

    /// Best tour found so far.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    /// Best-so-far cost after each generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Number of tours constructed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Ends the run, returning the best tour, the history and the number
    /// of evaluations.
    pub fn finish(self) -> (Tour, Vec<f64>, usize) {
        (self.best, self.history, self.evaluations)
    }
}
