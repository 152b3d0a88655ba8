//! Random source capability used by the colony.
//!
//! Every stochastic decision (start city, roulette draw, seed-tour shuffle)
//! goes through [`RandomSource`]. Any [`rand::Rng`] is a random source;
//! [`ScriptedSource`] replays fixed draws for reproducible assertions.

use rand::seq::SliceRandom;
use rand::Rng;

/// The random draws the colony needs.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` must be positive.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniformly shuffles the slice in place.
    fn shuffle(&mut self, items: &mut [usize]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        items.shuffle(self);
    }
}

/// A deterministic source that cycles through scripted draws.
///
/// Unit draws and index draws come from two independent scripts; index
/// draws are reduced modulo the requested bound. Shuffles leave the slice
/// untouched, so seed tours are the identity permutation.
///
/// # Examples
///
/// ```
/// use u_aco::colony::{RandomSource, ScriptedSource};
///
/// let mut src = ScriptedSource::new(vec![0.25, 0.75], vec![3]);
/// assert_eq!(src.next_unit(), 0.25);
/// assert_eq!(src.next_unit(), 0.75);
/// assert_eq!(src.next_unit(), 0.25);
/// assert_eq!(src.next_index(2), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    units: Vec<f64>,
    indices: Vec<usize>,
    unit_pos: usize,
    index_pos: usize,
}

impl ScriptedSource {
    /// Creates a source from unit draws (clamped into `[0, 1)`) and index
    /// draws. An empty script yields `0.0` / `0` forever.
    pub fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
        let units = units
            .into_iter()
            .map(|u| if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        Self {
            units,
            indices,
            unit_pos: 0,
            index_pos: 0,
        }
    }

    /// A source that always draws `unit` and always picks index 0.
    pub fn constant(unit: f64) -> Self {
        Self::new(vec![unit], vec![0])
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let u = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        u
    }

    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.indices[self.index_pos % self.indices.len()];
        self.index_pos += 1;
        i % bound
    }

    fn shuffle(&mut self, _items: &mut [usize]) {}
}
