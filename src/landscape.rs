use anyhow::{Result, ensure};
use nalgebra::Point2;
use tracing::debug;

use crate::framing::Extent;
use crate::objective::{Objective1D, Objective2D};

/// `n` evenly spaced values covering `[lo, hi]`, endpoints exact.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2);
    let step = (hi - lo) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    if let Some(last) = values.last_mut() {
        *last = hi;
    }
    values
}

/// Sampled 1-D landscape over a framed extent.
#[derive(Debug, Clone)]
pub struct LineProfile {
    extent: Extent,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LineProfile {
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

/// Evaluate the objective on `resolution` evenly spaced x-values spanning the
/// extent, in a single batch call. Any evaluation failure aborts the sample
/// and propagates unchanged.
pub fn sample_line<F>(objective: &F, extent: Extent, resolution: usize) -> Result<LineProfile>
where
    F: Objective1D + ?Sized,
{
    ensure!(
        resolution >= 2,
        "landscape resolution must be at least 2, got {resolution}"
    );
    let xs = linspace(extent.lo, extent.hi, resolution);
    let ys = objective.values(&xs)?;
    ensure!(
        ys.len() == xs.len(),
        "objective returned {} values for {} inputs",
        ys.len(),
        xs.len()
    );
    Ok(LineProfile { extent, xs, ys })
}

/// Sampled 2-D landscape in image convention: `value(row, col)` with the
/// column index tracking ascending x and row 0 holding the maximum y.
#[derive(Debug, Clone)]
pub struct LandscapeGrid {
    extent: Extent,
    resolution: usize,
    axis: Vec<f64>,
    values: Vec<f64>,
}

impl LandscapeGrid {
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.resolution + col]
    }

    /// Objective-space coordinate of a grid node. The extent is square, so
    /// one shared axis serves both directions; rows descend in y.
    pub fn node(&self, row: usize, col: usize) -> Point2<f64> {
        Point2::new(self.axis[col], self.axis[self.resolution - 1 - row])
    }

    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in &self.values {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        (min, max)
    }
}

/// Evaluate the objective on a `resolution x resolution` grid spanning the
/// square extent, one batch call per row, rows descending in y. This costs
/// `resolution^2` evaluations and dominates the render time at large
/// resolutions.
pub fn sample_grid<F>(objective: &F, extent: Extent, resolution: usize) -> Result<LandscapeGrid>
where
    F: Objective2D + ?Sized,
{
    ensure!(
        resolution >= 2,
        "landscape resolution must be at least 2, got {resolution}"
    );
    debug!(
        resolution,
        evaluations = resolution * resolution,
        "sampling landscape grid"
    );

    let axis = linspace(extent.lo, extent.hi, resolution);
    let mut values = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        let y = axis[resolution - 1 - row];
        let points: Vec<Point2<f64>> = axis.iter().map(|&x| Point2::new(x, y)).collect();
        let row_values = objective.values(&points)?;
        ensure!(
            row_values.len() == resolution,
            "objective returned {} values for a row of {resolution} nodes",
            row_values.len()
        );
        values.extend(row_values);
    }

    Ok(LandscapeGrid {
        extent,
        resolution,
        axis,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use approx::assert_relative_eq;

    const UNIT: Extent = Extent { lo: 0.0, hi: 1.0 };

    #[test]
    fn linspace_covers_endpoints_exactly() {
        let values = linspace(-2.0, 4.0, 7);
        assert_eq!(values.len(), 7);
        assert_relative_eq!(values[0], -2.0);
        assert_relative_eq!(values[6], 4.0);
        assert_relative_eq!(values[1] - values[0], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn line_profile_has_resolution_samples() {
        let parabola = |x: f64| x * x;
        for resolution in [2, 3, 17, 500] {
            let profile = sample_line(&parabola, UNIT, resolution).unwrap();
            assert_eq!(profile.xs().len(), resolution);
            assert_eq!(profile.ys().len(), resolution);
        }
    }

    #[test]
    fn line_sampling_rejects_resolution_below_two() {
        let parabola = |x: f64| x * x;
        assert!(sample_line(&parabola, UNIT, 1).is_err());
    }

    #[test]
    fn grid_shape_is_resolution_squared() {
        let bowl = |p: Point2<f64>| p.x * p.x + p.y * p.y;
        let extent = Extent { lo: -2.0, hi: 4.0 };
        let grid = sample_grid(&bowl, extent, 3).unwrap();
        assert_eq!(grid.resolution(), 3);
        // every node addressable
        for row in 0..3 {
            for col in 0..3 {
                let _ = grid.value(row, col);
            }
        }
    }

    #[test]
    fn grid_rows_descend_in_y() {
        let height = |p: Point2<f64>| p.y;
        let grid = sample_grid(&height, UNIT, 5).unwrap();
        assert_relative_eq!(grid.value(0, 0), 1.0);
        assert_relative_eq!(grid.value(4, 0), 0.0);
        assert_relative_eq!(grid.value(2, 3), 0.5);
    }

    #[test]
    fn grid_values_match_node_coordinates() {
        // index-to-coordinate correspondence is the whole contract; the
        // traversal order used to fill the grid must not leak into it
        let plane = |p: Point2<f64>| 3.0 * p.x - 2.0 * p.y;
        let extent = Extent { lo: -1.0, hi: 2.0 };
        let grid = sample_grid(&plane, extent, 7).unwrap();
        for row in 0..7 {
            for col in 0..7 {
                let node = grid.node(row, col);
                assert_relative_eq!(
                    grid.value(row, col),
                    3.0 * node.x - 2.0 * node.y,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn grid_min_max_scans_all_values() {
        let saddle = |p: Point2<f64>| p.x * p.x - p.y * p.y;
        let extent = Extent { lo: -1.0, hi: 1.0 };
        let grid = sample_grid(&saddle, extent, 9).unwrap();
        let (min, max) = grid.min_max();
        assert_relative_eq!(min, -1.0);
        assert_relative_eq!(max, 1.0);
    }

    struct FailsAtOrigin;

    impl Objective2D for FailsAtOrigin {
        fn value(&self, point: Point2<f64>) -> Result<f64> {
            if point.x == 0.0 && point.y == 0.0 {
                return Err(anyhow!("objective undefined at the origin"));
            }
            Ok(1.0 / (point.x * point.x + point.y * point.y))
        }
    }

    #[test]
    fn grid_sampling_propagates_evaluation_error() {
        let extent = Extent { lo: -1.0, hi: 1.0 };
        let result = sample_grid(&FailsAtOrigin, extent, 3);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("undefined at the origin")
        );
    }
}
