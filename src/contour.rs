use crate::landscape::LandscapeGrid;

/// One straight piece of an isoline, in grid/pixel index coordinates
/// (x right, y down, the same space `PixelMapper` targets).
#[derive(Debug, Clone, Copy)]
pub struct IsolineSegment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// All isoline segments extracted for one contour level.
#[derive(Debug, Clone)]
pub struct LevelIsolines {
    pub level: f64,
    pub segments: Vec<IsolineSegment>,
}

/// Round-valued contour levels covering `(min, max)`, roughly
/// `target_count` of them. Returns an empty set for a flat field.
pub fn auto_levels(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if !(max > min) || target_count == 0 {
        return Vec::new();
    }
    let step = nice_number((max - min) / target_count as f64, true);
    if !(step > 0.0) {
        return Vec::new();
    }
    let mut levels = Vec::new();
    let mut level = (min / step).ceil() * step;
    while level < max - step * 1e-9 {
        if level > min {
            levels.push(level);
        }
        level += step;
    }
    levels
}

/// Marching squares over the sampled grid, one pass per level.
pub fn extract_isolines(grid: &LandscapeGrid, levels: &[f64]) -> Vec<LevelIsolines> {
    levels
        .iter()
        .map(|&level| LevelIsolines {
            level,
            segments: march_level(grid, level),
        })
        .collect()
}

fn march_level(grid: &LandscapeGrid, level: f64) -> Vec<IsolineSegment> {
    let resolution = grid.resolution();
    let mut segments = Vec::new();

    for row in 0..resolution - 1 {
        for col in 0..resolution - 1 {
            let cell = Cell {
                x: col as f64,
                y: row as f64,
                tl: grid.value(row, col),
                tr: grid.value(row, col + 1),
                br: grid.value(row + 1, col + 1),
                bl: grid.value(row + 1, col),
            };
            if !cell.is_finite() {
                continue;
            }

            let mut index = 0u8;
            if cell.tl >= level {
                index |= 1;
            }
            if cell.tr >= level {
                index |= 2;
            }
            if cell.br >= level {
                index |= 4;
            }
            if cell.bl >= level {
                index |= 8;
            }

            for &(from, to) in crossings(index) {
                segments.push(IsolineSegment {
                    start: cell.edge_point(from, level),
                    end: cell.edge_point(to, level),
                });
            }
        }
    }

    segments
}

#[derive(Clone, Copy)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

struct Cell {
    x: f64,
    y: f64,
    tl: f64,
    tr: f64,
    br: f64,
    bl: f64,
}

impl Cell {
    fn is_finite(&self) -> bool {
        self.tl.is_finite() && self.tr.is_finite() && self.br.is_finite() && self.bl.is_finite()
    }

    /// Where the isoline crosses the given cell edge, by linear
    /// interpolation between the corner values.
    fn edge_point(&self, edge: Edge, level: f64) -> (f64, f64) {
        match edge {
            Edge::Top => (self.x + crossing_fraction(self.tl, self.tr, level), self.y),
            Edge::Bottom => (
                self.x + crossing_fraction(self.bl, self.br, level),
                self.y + 1.0,
            ),
            Edge::Left => (self.x, self.y + crossing_fraction(self.tl, self.bl, level)),
            Edge::Right => (
                self.x + 1.0,
                self.y + crossing_fraction(self.tr, self.br, level),
            ),
        }
    }
}

fn crossing_fraction(a: f64, b: f64, level: f64) -> f64 {
    let span = b - a;
    if span.abs() < f64::EPSILON {
        return 0.5;
    }
    ((level - a) / span).clamp(0.0, 1.0)
}

/// Edge pairs crossed by the isoline for each corner-occupancy index. Saddle
/// cases (5 and 10) keep the standard two-segment resolution.
fn crossings(index: u8) -> &'static [(Edge, Edge)] {
    match index {
        0 | 15 => &[],
        1 | 14 => &[(Edge::Left, Edge::Top)],
        2 | 13 => &[(Edge::Top, Edge::Right)],
        3 | 12 => &[(Edge::Left, Edge::Right)],
        4 | 11 => &[(Edge::Right, Edge::Bottom)],
        5 => &[(Edge::Left, Edge::Top), (Edge::Right, Edge::Bottom)],
        6 | 9 => &[(Edge::Top, Edge::Bottom)],
        7 | 8 => &[(Edge::Left, Edge::Bottom)],
        10 => &[(Edge::Top, Edge::Right), (Edge::Left, Edge::Bottom)],
        _ => unreachable!("corner index is four bits"),
    }
}

/// Round a raw interval to 1/2/5 times a power of ten, the usual tick-step
/// rule. `round` picks the nearest such value instead of the ceiling.
pub(crate) fn nice_number(value: f64, round: bool) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let exponent = value.log10().floor();
    let fraction = value / 10f64.powf(exponent);
    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * 10f64.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::Extent;
    use crate::landscape::sample_grid;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    const UNIT: Extent = Extent { lo: 0.0, hi: 1.0 };

    #[test]
    fn nice_number_rounds_to_decade_steps() {
        assert_relative_eq!(nice_number(0.9, true), 1.0);
        assert_relative_eq!(nice_number(2.3, true), 2.0);
        assert_relative_eq!(nice_number(4.0, true), 5.0);
        assert_relative_eq!(nice_number(80.0, true), 100.0);
    }

    #[test]
    fn auto_levels_fall_strictly_inside_the_range() {
        let levels = auto_levels(0.0, 1.0, 7);
        assert!(!levels.is_empty());
        for level in &levels {
            assert!(*level > 0.0 && *level < 1.0);
        }
        // round-valued: every level is a multiple of the step
        let step = levels[1] - levels[0];
        for pair in levels.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], step, max_relative = 1e-9);
        }
    }

    #[test]
    fn flat_field_yields_no_levels() {
        assert!(auto_levels(2.0, 2.0, 7).is_empty());
    }

    #[test]
    fn isoline_of_a_vertical_ramp_is_horizontal() {
        // f = y over the unit extent: the 0.5 isoline sits halfway down the
        // grid, at constant pixel y
        let ramp = |p: Point2<f64>| p.y;
        let grid = sample_grid(&ramp, UNIT, 9).unwrap();
        let isolines = extract_isolines(&grid, &[0.5]);
        assert_eq!(isolines.len(), 1);
        let segments = &isolines[0].segments;
        assert!(!segments.is_empty());
        for segment in segments {
            assert_relative_eq!(segment.start.1, 4.0, epsilon = 1e-9);
            assert_relative_eq!(segment.end.1, 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn isoline_count_grows_with_grid_size() {
        let bowl = |p: Point2<f64>| p.x * p.x + p.y * p.y;
        let extent = Extent { lo: -1.0, hi: 1.0 };
        let coarse = sample_grid(&bowl, extent, 8).unwrap();
        let fine = sample_grid(&bowl, extent, 32).unwrap();
        let coarse_segments = extract_isolines(&coarse, &[0.5])[0].segments.len();
        let fine_segments = extract_isolines(&fine, &[0.5])[0].segments.len();
        assert!(fine_segments > coarse_segments);
        assert!(coarse_segments > 0);
    }

    #[test]
    fn level_outside_the_field_produces_no_segments() {
        let bowl = |p: Point2<f64>| p.x * p.x + p.y * p.y;
        let extent = Extent { lo: -1.0, hi: 1.0 };
        let grid = sample_grid(&bowl, extent, 16).unwrap();
        let isolines = extract_isolines(&grid, &[100.0]);
        assert!(isolines[0].segments.is_empty());
    }
}
