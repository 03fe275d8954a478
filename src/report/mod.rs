//! Presentation helpers for run results.
//!
//! [`RouteBreakdown`] lists each leg of a tour with its cost;
//! [`ConvergenceSeries`] writes the three per-iteration series of an
//! [`AcoResult`] as CSV, or with the `plot` feature draws them as stacked
//! line charts in a PNG.

#[cfg(feature = "plot")]
mod plot;

use std::fmt;
use std::io::{self, Write};

use crate::aco::AcoResult;
use crate::matrix::DistanceMatrix;

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

/// Step-by-step cost breakdown of a tour.
///
/// # Examples
///
/// ```
/// use u_antpath::matrix::DistanceMatrix;
/// use u_antpath::report::RouteBreakdown;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.5, 5.0],
///     vec![0.0, 0.0, 2.0],
///     vec![0.0, 0.0, 0.0],
/// ]).unwrap();
/// let route = RouteBreakdown::new(&[0, 1, 2], &dm);
/// assert_eq!(route.legs().len(), 2);
/// assert_eq!(route.total(), 3.5);
/// assert!(route.to_string().contains("0 -> 1: 1.50"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBreakdown {
    legs: Vec<Leg>,
    total: f64,
}

impl RouteBreakdown {
    pub fn new(tour: &[usize], distance: &DistanceMatrix) -> Self {
        let legs: Vec<Leg> = tour
            .windows(2)
            .map(|w| Leg {
                from: w[0],
                to: w[1],
                cost: distance.get(w[0], w[1]),
            })
            .collect();
        let total = legs.iter().map(|l| l.cost).sum();
        Self { legs, total }
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl fmt::Display for RouteBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(50);
        writeln!(f, "{rule}")?;
        for leg in &self.legs {
            writeln!(f, "{} -> {}: {:.2}", leg.from, leg.to, leg.cost)?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "Total length: {:.2}", self.total)
    }
}

/// Per-iteration convergence series of a run.
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceSeries<'a> {
    pub distance: &'a [f64],
    pub pheromone: &'a [f64],
    pub probability: &'a [f64],
}

impl<'a> ConvergenceSeries<'a> {
    /// Borrows the mean-distance, pheromone and probability histories.
    pub fn from_result(result: &'a AcoResult) -> Self {
        Self {
            distance: &result.distance_history,
            pheromone: &result.pheromone_history,
            probability: &result.probability_history,
        }
    }

    /// Number of rows written by [`write_csv`](Self::write_csv).
    pub fn len(&self) -> usize {
        self.distance
            .len()
            .max(self.pheromone.len())
            .max(self.probability.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `iteration,mean_distance,best_path_pheromone,mean_max_probability`.
    ///
    /// Each series is indexed from zero independently; a series shorter
    /// than the others leaves its column empty.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "iteration,mean_distance,best_path_pheromone,mean_max_probability"
        )?;
        for i in 0..self.len() {
            writeln!(
                out,
                "{},{},{},{}",
                i,
                cell(self.distance, i),
                cell(self.pheromone, i),
                cell(self.probability, i)
            )?;
        }
        out.flush()
    }
}

fn cell(series: &[f64], i: usize) -> String {
    series.get(i).map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dm() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 20.0],
            vec![12.0, 0.0, 22.0],
            vec![14.0, 24.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_breakdown_legs() {
        let route = RouteBreakdown::new(&[2, 0, 1], &dm());
        assert_eq!(
            route.legs(),
            &[
                Leg {
                    from: 2,
                    to: 0,
                    cost: 14.0
                },
                Leg {
                    from: 0,
                    to: 1,
                    cost: 10.0
                },
            ]
        );
        assert_eq!(route.total(), 24.0);
    }

    #[test]
    fn test_breakdown_display() {
        let text = RouteBreakdown::new(&[0, 2], &dm()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0 -> 2: 20.00");
        assert_eq!(lines[3], "Total length: 20.00");
    }

    #[test]
    fn test_breakdown_single_node() {
        let route = RouteBreakdown::new(&[1], &dm());
        assert!(route.legs().is_empty());
        assert_eq!(route.total(), 0.0);
    }

    #[test]
    fn test_csv_uneven_series() {
        let series = ConvergenceSeries {
            distance: &[3.0, 2.5],
            pheromone: &[1.25],
            probability: &[0.5, 0.75],
        };
        let mut buf = Vec::new();
        series.write_csv(&mut buf).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "iteration,mean_distance,best_path_pheromone,mean_max_probability",
                "0,3,1.25,0.5",
                "1,2.5,,0.75",
            ]
        );
    }

    #[test]
    fn test_empty_series() {
        let series = ConvergenceSeries {
            distance: &[],
            pheromone: &[],
            probability: &[],
        };
        assert!(series.is_empty());
    }
}
