//! Result reporting.

use std::fmt;

use serde::Serialize;

use crate::models::Solution;

/// What gets reported for one solved instance.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_aco::io::Report;
/// use u_aco::models::{Solution, Tour};
///
/// let sol = Solution::new(Tour::new(vec![0, 1, 2, 3], 4.0), Duration::from_millis(1500));
/// let report = Report::new("square", &sol);
/// assert_eq!(report.to_string(), "square 4 1.5 s\nbest tour: 0 1 2 3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Instance name.
    pub instance: String,
    /// Best tour cost; `None` when no tour was found.
    pub cost: Option<f64>,
    /// Wall-clock seconds for the run.
    pub elapsed_secs: f64,
    /// Best tour as city indices.
    pub tour: Vec<usize>,
    /// Generations that were run.
    pub generations: usize,
}

impl Report {
    /// Builds a report from a finished run.
    pub fn new(instance: impl Into<String>, solution: &Solution) -> Self {
        Self {
            instance: instance.into(),
            cost: solution.is_found().then(|| solution.cost()),
            elapsed_secs: solution.elapsed_secs(),
            tour: solution.tour().order().to_vec(),
            generations: solution.generations(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(cost) => {
                writeln!(f, "{} {} {} s", self.instance, cost, self.elapsed_secs)?;
                write!(f, "best tour:")?;
                for city in &self.tour {
                    write!(f, " {city}")?;
                }
                Ok(())
            }
            None => {
                writeln!(f, "{} inf {} s", self.instance, self.elapsed_secs)?;
                write!(f, "no valid tour found")
            }
        }
    }
}
