//! Problem instance files.
//!
//! An instance is a whitespace-separated token stream: the city count `n`
//! followed either by `n` coordinate pairs (`x y`) or by an `n×n` cost
//! matrix in row-major order. Line breaks carry no meaning.
//!
//! ```text
//! 4
//! 0 0
//! 0 1
//! 1 1
//! 1 0
//! ```

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};
use crate::models::City;

/// Directed costs closer than this count as equal.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// How the values after the city count are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceFormat {
    /// Coordinates if exactly `2n` values follow, a cost matrix if exactly
    /// `n²` follow. For `n = 2` both counts agree and coordinates win.
    #[default]
    Auto,
    /// `n` coordinate pairs.
    Coordinates,
    /// `n×n` costs, row-major.
    Matrix,
}

impl FromStr for InstanceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "coords" | "coordinates" | "euclidean" => Ok(Self::Coordinates),
            "matrix" | "explicit" => Ok(Self::Matrix),
            other => Err(format!("unknown instance format: {other}")),
        }
    }
}

/// A loaded problem instance.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use u_aco::io::{Instance, InstanceFormat};
///
/// let text = "3\n0 0\n3 0\n3 4\n";
/// let inst = Instance::parse(text, Path::new("triangle.txt"), InstanceFormat::Auto).unwrap();
/// assert_eq!(inst.name, "triangle");
/// assert_eq!(inst.dimension(), 3);
/// assert!((inst.distances.get(0, 2) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    /// Instance name (file stem).
    pub name: String,
    /// City coordinates, when the file gave coordinates.
    pub cities: Option<Vec<City>>,
    /// Travel costs.
    pub distances: DistanceMatrix,
}

impl Instance {
    /// Reads and parses an instance file.
    pub fn load(path: &Path, format: InstanceFormat) -> AcoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AcoError::io(path, e))?;
        Self::parse(&text, path, format)
    }

    /// Parses instance text; `path` names the source in errors and
    /// provides the instance name.
    pub fn parse(text: &str, path: &Path, format: InstanceFormat) -> AcoResult<Self> {
        let tokens: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();

        let (&(count_line, count_token), values) = tokens
            .split_first()
            .ok_or_else(|| AcoError::parse(path, None, "missing city count"))?;
        let n: usize = count_token.parse().map_err(|_| {
            AcoError::parse(path, Some(count_line), format!("invalid city count: {count_token}"))
        })?;

        let format = resolve_format(format, n, values.len())
            .ok_or_else(|| {
                AcoError::parse(
                    path,
                    None,
                    format!(
                        "{n} cities need {} coordinates or {} costs, found {} values",
                        2 * n,
                        n * n,
                        values.len()
                    ),
                )
            })?;

        let numbers = values
            .iter()
            .map(|&(line, token)| parse_value(path, line, token))
            .collect::<AcoResult<Vec<f64>>>()?;

        let (cities, distances) = match format {
            InstanceFormat::Coordinates => {
                let cities: Vec<City> = numbers
                    .chunks_exact(2)
                    .map(|xy| City::new(xy[0], xy[1]))
                    .collect();
                let distances = DistanceMatrix::from_cities(&cities);
                (Some(cities), distances)
            }
            _ => {
                let distances = DistanceMatrix::from_data(n, numbers)
                    .ok_or_else(|| AcoError::parse(path, None, "cost matrix is not square"))?;
                if let Some((i, j)) = distances.asymmetric_pair(SYMMETRY_TOLERANCE) {
                    debug!(
                        "{}: asymmetric costs ({i}->{j} = {}, {j}->{i} = {})",
                        path.display(),
                        distances.get(i, j),
                        distances.get(j, i)
                    );
                }
                (None, distances)
            }
        };

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Ok(Self {
            name,
            cities,
            distances,
        })
    }

    /// Number of cities.
    pub fn dimension(&self) -> usize {
        self.distances.size()
    }

    /// Whether every edge costs the same in both directions.
    pub fn is_symmetric(&self) -> bool {
        self.distances.asymmetric_pair(SYMMETRY_TOLERANCE).is_none()
    }
}

/// Settles `Auto` by value count, and checks explicit formats against it.
fn resolve_format(format: InstanceFormat, n: usize, found: usize) -> Option<InstanceFormat> {
    let coords = found == 2 * n;
    let matrix = found == n * n;
    match format {
        InstanceFormat::Auto if coords => Some(InstanceFormat::Coordinates),
        InstanceFormat::Auto if matrix => Some(InstanceFormat::Matrix),
        InstanceFormat::Coordinates if coords => Some(InstanceFormat::Coordinates),
        InstanceFormat::Matrix if matrix => Some(InstanceFormat::Matrix),
        _ => None,
    }
}

fn parse_value(path: &Path, line: usize, token: &str) -> AcoResult<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AcoError::parse(path, Some(line), format!("invalid number: {token}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, format: InstanceFormat) -> AcoResult<Instance> {
        Instance::parse(text, Path::new("data/test.txt"), format)
    }

    #[test]
    fn test_parse_coordinates() {
        let inst = parse("4\n0 0\n0 1\n1 1\n1 0\n", InstanceFormat::Auto).expect("valid");
        assert_eq!(inst.name, "test");
        assert_eq!(inst.dimension(), 4);
        let cities = inst.cities.as_ref().expect("coordinates");
        assert_eq!(cities[2], City::new(1.0, 1.0));
        assert!((inst.distances.tour_cost(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_matrix() {
        let text = "3\n0 2 9\n1 0 6\n15 7 0\n";
        let inst = parse(text, InstanceFormat::Auto).expect("valid");
        assert!(inst.cities.is_none());
        assert_eq!(inst.distances.get(0, 2), 9.0);
        assert_eq!(inst.distances.get(2, 0), 15.0);
        assert!(!inst.is_symmetric());
    }

    #[test]
    fn test_coordinates_are_symmetric() {
        let inst = parse("3\n0 0\n3 0\n3 4\n", InstanceFormat::Auto).expect("valid");
        assert!(inst.is_symmetric());
        let inst = parse("2\n0 7\n7 0\n", InstanceFormat::Matrix).expect("valid");
        assert!(inst.is_symmetric());
    }

    #[test]
    fn test_tokens_ignore_line_layout() {
        let inst = parse("3 0 0 3 0\n3\n4", InstanceFormat::Coordinates).expect("valid");
        assert!((inst.distances.get(0, 2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_cities_default_to_coordinates() {
        let inst = parse("2\n0 5\n5 0\n", InstanceFormat::Auto).expect("valid");
        assert!(inst.cities.is_some());
        let inst = parse("2\n0 5\n5 0\n", InstanceFormat::Matrix).expect("valid");
        assert!(inst.cities.is_none());
        assert_eq!(inst.distances.get(0, 1), 5.0);
    }

    #[test]
    fn test_missing_count() {
        let err = parse("   \n", InstanceFormat::Auto).unwrap_err();
        assert!(err.to_string().contains("missing city count"));
    }

    #[test]
    fn test_invalid_count() {
        let err = parse("four\n0 0\n", InstanceFormat::Auto).unwrap_err();
        assert!(matches!(err, AcoError::Parse { line: Some(1), .. }));
    }

    #[test]
    fn test_wrong_value_count() {
        let err = parse("3\n0 0\n1 1\n", InstanceFormat::Auto).unwrap_err();
        assert!(err.to_string().contains("found 4 values"));
        assert!(parse("3\n0 0\n1 1\n2 2\n", InstanceFormat::Matrix).is_err());
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = parse("2\n0 0\n1 x\n", InstanceFormat::Auto).unwrap_err();
        assert!(matches!(err, AcoError::Parse { line: Some(3), .. }));
        assert!(parse("2\n0 0\n1 inf\n", InstanceFormat::Auto).is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("auto".parse::<InstanceFormat>(), Ok(InstanceFormat::Auto));
        assert_eq!("Coords".parse::<InstanceFormat>(), Ok(InstanceFormat::Coordinates));
        assert_eq!("matrix".parse::<InstanceFormat>(), Ok(InstanceFormat::Matrix));
        assert!("tsplib".parse::<InstanceFormat>().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Instance::load(Path::new("/nonexistent/instance.txt"), InstanceFormat::Auto)
            .unwrap_err();
        assert!(matches!(err, AcoError::Io { .. }));
    }
}
