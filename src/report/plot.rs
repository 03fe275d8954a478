//! PNG charts of the convergence series.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::ConvergenceSeries;
use crate::error::PlotError;

/// Pixel size of one of the three stacked panels.
const PANEL: (u32, u32) = (800, 300);

impl ConvergenceSeries<'_> {
    /// Draws mean tour length, best-path pheromone and mean max transition
    /// probability as three stacked line charts against the iteration index.
    ///
    /// Non-finite values (iterations where every tour was infinitely long)
    /// are left out of the line.
    pub fn render_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let fail = |message: String| PlotError::Render {
            path: path.to_path_buf(),
            message,
        };

        let root = BitMapBackend::new(path, (PANEL.0, PANEL.1 * 3)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| fail(e.to_string()))?;

        let panels = root.split_evenly((3, 1));
        let charts = [
            (self.distance, "Mean tour length", "Distance", BLUE),
            (self.pheromone, "Best-path pheromone", "Pheromone", RED),
            (
                self.probability,
                "Mean max transition probability",
                "Probability",
                GREEN,
            ),
        ];
        for (area, (series, caption, y_desc, color)) in panels.iter().zip(charts) {
            draw_panel(area, series, caption, y_desc, color).map_err(fail)?;
        }

        root.present().map_err(|e| fail(e.to_string()))
    }
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    series: &[f64],
    caption: &str,
    y_desc: &str,
    color: RGBColor,
) -> Result<(), String> {
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, value_range(series))
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc(y_desc)
        .draw()
        .map_err(|e| e.to_string())?;

    let points = series
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (i as f64, v));
    chart
        .draw_series(LineSeries::new(points, color))
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Y range covering the finite values with 5% headroom on each side.
fn value_range(series: &[f64]) -> Range<f64> {
    let (lo, hi) = series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else {
        lo.abs().max(1.0) * 0.05
    };
    (lo - pad)..(hi + pad)
}
