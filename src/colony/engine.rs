//! Engine driver: one full colony run over one instance.

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};
use crate::models::{Solution, Tour};

use super::config::AcoConfig;
use super::controller::Colony;
use super::pheromone::PheromoneMatrix;
use super::random::RandomSource;
use super::visibility::Visibility;

/// Solves TSP instances with Ant Colony Optimization.
///
/// A run builds the visibility matrix, fills the pheromone matrix with the
/// configured initial value, bootstraps it from random seed tours, then
/// runs a fixed number of generations and reports the best tour.
///
/// # Examples
///
/// ```
/// use u_aco::models::City;
/// use u_aco::distance::DistanceMatrix;
/// use u_aco::colony::{AcoConfig, AcoEngine};
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ]);
/// let engine = AcoEngine::new(AcoConfig::default().with_seed(42));
/// let solution = engine.solve(&dm, 50).unwrap();
///
/// assert!((solution.cost() - 4.0).abs() < 1e-9);
/// assert_eq!(solution.tour().order()[0], 0);
/// assert_eq!(solution.generations(), 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AcoEngine {
    config: AcoConfig,
}

impl AcoEngine {
    /// Creates an engine with the given parameters.
    pub fn new(config: AcoConfig) -> Self {
        Self { config }
    }

    /// Parameters used by this engine.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs `generations` generations, seeding the random source from
    /// the configured seed (or the OS when none is set).
    pub fn solve(&self, distances: &DistanceMatrix, generations: usize) -> AcoResult<Solution> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.solve_with_rng(distances, generations, &mut rng)
    }

    /// Runs `generations` generations drawing from `rng`.
    ///
    /// The reported tour is rotated to start at city 0. Its cost is `+inf`
    /// when no tour was built (zero generations or zero ants).
    pub fn solve_with_rng<R: RandomSource + ?Sized>(
        &self,
        distances: &DistanceMatrix,
        generations: usize,
        rng: &mut R,
    ) -> AcoResult<Solution> {
        self.config.validate()?;
        let n = distances.size();
        if n == 0 {
            return Err(AcoError::Domain("instance has no cities".into()));
        }

        let start = Instant::now();
        info!(
            "solving {n} cities for {generations} generations with {} ants",
            self.config.num_ants
        );

        if n == 1 {
            let tour = Tour::new(vec![0], 0.0);
            return Ok(Solution::new(tour, start.elapsed()).with_history(vec![0.0; generations]));
        }

        let visibility = Visibility::from_distances(distances)?;
        let mut pheromone = PheromoneMatrix::filled(n, self.config.initial_pheromone);
        pheromone.bootstrap(distances, rng)?;

        let mut colony = Colony::new(distances, &visibility, &mut pheromone, &self.config);
        colony.run(generations, rng)?;
        let (best, history, evaluations) = colony.finish();

        let elapsed = start.elapsed();
        info!(
            "best cost {:.6} after {} evaluations in {:.3}s",
            best.cost(),
            evaluations,
            elapsed.as_secs_f64()
        );

        Ok(Solution::new(best.starting_at(0), elapsed)
            .with_history(history)
            .with_evaluations(evaluations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_unit_square_converges() {
        let engine = AcoEngine::new(AcoConfig::default().with_seed(7));
        let sol = engine.solve(&unit_square(), 200).expect("solve");
        assert!((sol.cost() - 4.0).abs() < 1e-6);
        assert!(sol.tour().is_permutation(4));
        assert_eq!(sol.evaluations(), 2000);
    }

    #[test]
    fn test_two_cities() {
        let dm = DistanceMatrix::from_cities(&[City::new(0.0, 0.0), City::new(3.0, 4.0)]);
        for seed in 0..5 {
            let engine = AcoEngine::new(AcoConfig::default().with_seed(seed).with_alpha(3.0));
            let sol = engine.solve(&dm, 3).expect("solve");
            assert_eq!(sol.tour().order(), &[0, 1]);
            assert!((sol.cost() - 10.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_city() {
        let dm = DistanceMatrix::from_cities(&[City::new(2.0, 2.0)]);
        let sol = AcoEngine::default().solve(&dm, 5).expect("solve");
        assert_eq!(sol.tour().order(), &[0]);
        assert_eq!(sol.cost(), 0.0);
        assert_eq!(sol.generations(), 5);
    }

    #[test]
    fn test_empty_instance_rejected() {
        let dm = DistanceMatrix::new(0);
        assert!(matches!(
            AcoEngine::default().solve(&dm, 5),
            Err(AcoError::Domain(_))
        ));
    }

    #[test]
    fn test_coincident_cities_rejected() {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(0.0, 0.0),
        ]);
        assert!(matches!(
            AcoEngine::default().solve(&dm, 5),
            Err(AcoError::Domain(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let engine = AcoEngine::new(AcoConfig::default().with_rho(1.5));
        assert!(matches!(
            engine.solve(&unit_square(), 5),
            Err(AcoError::Config(_))
        ));
    }

    #[test]
    fn test_no_generations_reports_unfound() {
        let sol = AcoEngine::default().solve(&unit_square(), 0).expect("solve");
        assert!(!sol.is_found());
        assert!(sol.tour().is_empty());
        assert_eq!(sol.generations(), 0);
    }

    #[test]
    fn test_no_ants_reports_unfound() {
        let engine = AcoEngine::new(AcoConfig::default().with_num_ants(0));
        let sol = engine.solve(&unit_square(), 10).expect("solve");
        assert!(!sol.is_found());
        assert_eq!(sol.generations(), 10);
        assert_eq!(sol.evaluations(), 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let cities: Vec<City> = (0..12)
            .map(|i| {
                let t = i as f64 * 0.5236;
                City::new(10.0 * t.cos() + (i % 3) as f64, 10.0 * t.sin())
            })
            .collect();
        let dm = DistanceMatrix::from_cities(&cities);
        let engine = AcoEngine::new(AcoConfig::default().with_seed(99));
        let a = engine.solve(&dm, 20).expect("solve");
        let b = engine.solve(&dm, 20).expect("solve");
        assert_eq!(a.tour(), b.tour());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, 1.0, 10.0, 10.0, 0.0, 1.0, 1.0, 10.0, 0.0],
        )
        .expect("valid");
        let engine = AcoEngine::new(AcoConfig::default().with_seed(3));
        let sol = engine.solve(&dm, 30).expect("solve");
        // 0 -> 1 -> 2 -> 0 costs 3; the reverse direction costs 30.
        assert_eq!(sol.tour().order(), &[0, 1, 2]);
        assert!((sol.cost() - 3.0).abs() < 1e-12);
    }
}
