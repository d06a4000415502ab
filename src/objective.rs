use anyhow::Result;
use nalgebra::Point2;

/// Scalar objective over a one-dimensional domain.
///
/// `value` is the single-point contract. `values` is the batch contract the
/// landscape sampler relies on; the default implementation evaluates point by
/// point, and implementors with a vectorized evaluation may override it as
/// long as the returned sequence matches the elementwise one.
pub trait Objective1D {
    /// Function value f(x) at x.
    fn value(&self, x: f64) -> Result<f64>;

    /// Elementwise values for a batch of inputs, in input order.
    fn values(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

impl<F> Objective1D for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> Result<f64> {
        Ok(self(x))
    }
}

/// Scalar objective over a two-dimensional domain.
pub trait Objective2D {
    /// Function value f(p) at p.
    fn value(&self, point: Point2<f64>) -> Result<f64>;

    /// Elementwise values for a batch of points, in input order.
    fn values(&self, points: &[Point2<f64>]) -> Result<Vec<f64>> {
        points.iter().map(|&p| self.value(p)).collect()
    }
}

impl<F> Objective2D for F
where
    F: Fn(Point2<f64>) -> f64,
{
    fn value(&self, point: Point2<f64>) -> Result<f64> {
        Ok(self(point))
    }
}
