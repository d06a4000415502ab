use nalgebra::Point2;

use crate::framing::Extent;
use crate::landscape::linspace;

/// Affine map from objective space into the landscape grid's pixel index
/// space. Column position tracks ascending x; the vertical component is
/// flipped because row 0 of the grid holds the maximum y.
#[derive(Debug, Clone, Copy)]
pub struct PixelMapper {
    extent: Extent,
    resolution: usize,
}

impl PixelMapper {
    /// `extent.span()` must be positive; framing guarantees it.
    pub fn new(extent: Extent, resolution: usize) -> Self {
        Self { extent, resolution }
    }

    pub fn to_pixel(&self, point: Point2<f64>) -> (f64, f64) {
        let span = self.extent.span();
        let tx = (point.x - self.extent.lo) / span;
        let ty = (point.y - self.extent.lo) / span;
        (
            tx * self.resolution as f64,
            (1.0 - ty) * self.resolution as f64,
        )
    }

    /// Horizontal tick marks: pixel position paired with the objective-space
    /// value it labels, ascending left to right.
    pub fn x_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        let pixels = linspace(0.0, self.resolution as f64, count);
        let labels = linspace(self.extent.lo, self.extent.hi, count);
        pixels.into_iter().zip(labels).collect()
    }

    /// Vertical tick marks: pixel position paired with the objective-space
    /// value it labels. Pixel positions descend while values ascend, the
    /// same flip applied to trajectory points.
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        let pixels = linspace(self.resolution as f64, 0.0, count);
        let labels = linspace(self.extent.lo, self.extent.hi, count);
        pixels.into_iter().zip(labels).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXTENT: Extent = Extent { lo: -2.0, hi: 4.0 };

    #[test]
    fn corners_map_to_pixel_corners() {
        let mapper = PixelMapper::new(EXTENT, 3);
        let (px, py) = mapper.to_pixel(Point2::new(-2.0, -2.0));
        assert_relative_eq!(px, 0.0);
        assert_relative_eq!(py, 3.0);
        let (px, py) = mapper.to_pixel(Point2::new(4.0, 4.0));
        assert_relative_eq!(px, 3.0);
        assert_relative_eq!(py, 0.0);
    }

    #[test]
    fn center_maps_to_pixel_center() {
        let mapper = PixelMapper::new(EXTENT, 3);
        let (px, py) = mapper.to_pixel(Point2::new(1.0, 1.0));
        assert_relative_eq!(px, 1.5);
        assert_relative_eq!(py, 1.5);
    }

    #[test]
    fn round_trips_through_the_affine_inverse() {
        let mapper = PixelMapper::new(EXTENT, 500);
        let resolution = 500.0;
        let span = EXTENT.span();
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(-1.75, 3.25),
            Point2::new(3.9, -1.9),
        ] {
            let (px, py) = mapper.to_pixel(point);
            let x_back = EXTENT.lo + px / resolution * span;
            let y_back = EXTENT.lo + (1.0 - py / resolution) * span;
            assert_relative_eq!(x_back, point.x, epsilon = 1e-12);
            assert_relative_eq!(y_back, point.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn tick_labels_span_the_extent() {
        let mapper = PixelMapper::new(EXTENT, 500);
        let x_ticks = mapper.x_ticks(5);
        assert_eq!(x_ticks.len(), 5);
        assert_relative_eq!(x_ticks[0].0, 0.0);
        assert_relative_eq!(x_ticks[0].1, -2.0);
        assert_relative_eq!(x_ticks[4].0, 500.0);
        assert_relative_eq!(x_ticks[4].1, 4.0);

        let y_ticks = mapper.y_ticks(5);
        assert_relative_eq!(y_ticks[0].0, 500.0);
        assert_relative_eq!(y_ticks[0].1, -2.0);
        assert_relative_eq!(y_ticks[4].0, 0.0);
        assert_relative_eq!(y_ticks[4].1, 4.0);
    }
}
