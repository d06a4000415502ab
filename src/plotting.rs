use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::config::RenderOptions;
use crate::contour::{auto_levels, extract_isolines, nice_number};
use crate::framing::{frame_1d, frame_2d};
use crate::landscape::{LandscapeGrid, LineProfile, sample_grid, sample_line};
use crate::mapping::PixelMapper;
use crate::objective::{Objective1D, Objective2D};
use crate::trajectory::{Trajectory1D, Trajectory2D};

const TITLE_BAND_PX: i32 = 34;
const TITLE_FONT: i32 = 24;
const AXIS_FONT: i32 = 18;
const TICK_FONT: i32 = 14;
const TICK_LENGTH_PX: f64 = 8.0;
const AXIS_TICKS: usize = 5;
const CONTOUR_LEVEL_TARGET: usize = 7;
const ENDPOINT_RADIUS: i32 = 5;
const WAYPOINT_RADIUS: i32 = 4;
const ARROW_HEAD_PX: f64 = 9.0;

const LEFT_MARGIN: f64 = 62.0;
const RIGHT_MARGIN: f64 = 24.0;
const TOP_MARGIN: f64 = 12.0;
const BOTTOM_MARGIN: f64 = 56.0;

const PINK: RGBColor = RGBColor(255, 105, 180);

/// Render the two-panel figure for a 1-D descent: convergence curve on the
/// left, sampled objective curve with the visited path on the right.
///
/// The drawing area is owned for the duration of this call and handed back
/// to the caller's backend on `present`; nothing is retained.
pub fn render_steps_1d<DB, F>(
    area: DrawingArea<DB, Shift>,
    objective: &F,
    trajectory: &Trajectory1D,
    options: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Objective1D + ?Sized,
{
    options.validate()?;

    let step_values = trajectory.values_along(objective)?;
    let extent = frame_1d(trajectory, options.margin_1d());
    let profile = sample_line(objective, extent, options.resolution)?;
    debug!(
        steps = trajectory.len(),
        resolution = options.resolution,
        "rendering 1-d descent figure"
    );

    area.fill(&WHITE)
        .map_err(|e| anyhow!("failed to clear drawing area: {e}"))?;
    let (width, _) = area.dim_in_pixel();
    let (convergence_area, landscape_area) = area.split_horizontally((width / 2) as i32);

    draw_convergence_panel(&convergence_area, &step_values)?;
    draw_profile_panel(&landscape_area, &profile, trajectory.points(), &step_values)?;

    area.present()
        .map_err(|e| anyhow!("failed to finalize figure: {e}"))?;
    Ok(())
}

/// Render the two-panel figure for a 2-D descent: convergence curve on the
/// left, landscape heatmap or contours with the visited path on the right.
pub fn render_steps_2d<DB, F>(
    area: DrawingArea<DB, Shift>,
    objective: &F,
    trajectory: &Trajectory2D,
    options: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Objective2D + ?Sized,
{
    options.validate()?;

    let step_values = trajectory.values_along(objective)?;
    let extent = frame_2d(trajectory, options.margin_2d());
    let grid = sample_grid(objective, extent, options.resolution)?;
    debug!(
        steps = trajectory.len(),
        resolution = options.resolution,
        contours = options.contours,
        "rendering 2-d descent figure"
    );

    area.fill(&WHITE)
        .map_err(|e| anyhow!("failed to clear drawing area: {e}"))?;
    let (width, _) = area.dim_in_pixel();
    let (convergence_area, landscape_area) = area.split_horizontally((width / 2) as i32);

    draw_convergence_panel(&convergence_area, &step_values)?;
    draw_landscape_panel(&landscape_area, &grid, trajectory, options.contours)?;

    area.present()
        .map_err(|e| anyhow!("failed to finalize figure: {e}"))?;
    Ok(())
}

/// Consecutive (from, to) pairs in traversal order, one per drawn arrow.
pub fn arrow_pairs<T: Copy>(points: &[T]) -> Vec<(T, T)> {
    points.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

fn draw_convergence_panel<DB>(panel: &DrawingArea<DB, Shift>, values: &[f64]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (title_area, chart_area) = panel.split_vertically(TITLE_BAND_PX);
    draw_panel_title(&title_area, "error in time")?;

    let last_index = (values.len() - 1).max(1) as f64;
    let (y_min, y_max) = min_max(values.iter().copied());
    let (y_lower, y_upper) = pad_range(y_min, y_max);

    let mut chart = ChartBuilder::on(&chart_area)
        .margin_left(10)
        .margin_right(18)
        .margin_bottom(10)
        .margin_top(6)
        .set_label_area_size(LabelAreaPosition::Left, 54)
        .set_label_area_size(LabelAreaPosition::Bottom, 42)
        .build_cartesian_2d(0.0..last_index, y_lower..y_upper)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("iterations")
        .y_desc("f(x)")
        .x_label_formatter(&|value| format_tick(*value))
        .y_label_formatter(&|value| format_tick(*value))
        .label_style(("sans-serif", TICK_FONT))
        .axis_desc_style(("sans-serif", AXIS_FONT))
        .draw()?;

    chart.draw_series(LineSeries::new(
        values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
        &BLACK,
    ))?;

    chart.draw_series(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Circle::new((i as f64, v), 3, BLACK.filled())),
    )?;

    Ok(())
}

fn draw_profile_panel<DB>(
    panel: &DrawingArea<DB, Shift>,
    profile: &LineProfile,
    steps: &[f64],
    step_values: &[f64],
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // title band kept empty so both panels share the same chart height
    let (_, chart_area) = panel.split_vertically(TITLE_BAND_PX);
    let (width, height) = chart_area.dim_in_pixel();
    let layout = PanelLayout::new(width as f64, height as f64);

    let extent = profile.extent();
    let (mut y_min, mut y_max) = min_max(profile.ys().iter().copied());
    for &value in step_values {
        y_min = y_min.min(value);
        y_max = y_max.max(value);
    }
    let (y_lower, y_upper) = pad_range(y_min, y_max);

    let x_ticks = tick_marks(&layout, extent.lo, extent.hi, Axis::Horizontal);
    let y_ticks = tick_marks(&layout, y_lower, y_upper, Axis::Vertical);
    draw_panel_axes(&chart_area, &layout, &x_ticks, &y_ticks, Some("x"), Some("f(x)"))?;

    let project = |x: f64, y: f64| {
        (
            layout.x_pixel(x, extent.lo, extent.hi),
            layout.y_pixel(y, y_lower, y_upper),
        )
    };

    // arrows first, then the visited points, then the curve on top,
    // preserving the original panel's stacking order
    let visited: Vec<(f64, f64)> = steps
        .iter()
        .zip(step_values)
        .map(|(&x, &y)| project(x, y))
        .collect();
    for (from, to) in arrow_pairs(&visited) {
        draw_arrow(&chart_area, from, to, &RED)?;
    }
    draw_visited_points(&chart_area, &visited, BLUE.filled(), MAGENTA.filled())?;

    let curve: Vec<(f64, f64)> = profile
        .xs()
        .iter()
        .zip(profile.ys())
        .map(|(&x, &y)| project(x, y))
        .collect();
    chart_area
        .draw(&PathElement::new(
            to_backend_points(curve),
            ShapeStyle::from(&BLACK),
        ))
        .map_err(|e| anyhow!("failed to draw objective curve: {e}"))?;

    Ok(())
}

fn draw_landscape_panel<DB>(
    panel: &DrawingArea<DB, Shift>,
    grid: &LandscapeGrid,
    trajectory: &Trajectory2D,
    contours: bool,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // title band kept empty so both panels share the same chart height
    let (_, chart_area) = panel.split_vertically(TITLE_BAND_PX);
    let (width, height) = chart_area.dim_in_pixel();
    let layout = PanelLayout::new_square(width as f64, height as f64);

    let resolution = grid.resolution();
    let mapper = PixelMapper::new(grid.extent(), resolution);
    let scale = layout.data_width() / resolution as f64;
    let to_panel = |(px, py): (f64, f64)| {
        (layout.data_left + px * scale, layout.data_top + py * scale)
    };

    if contours {
        draw_contour_field(&chart_area, grid, &to_panel)?;
    } else {
        draw_heatmap_field(&chart_area, grid, &layout, scale)?;
    }

    // back-mapped tick labels keep the axes in objective-space coordinates
    // even though everything inside the frame lives in pixel space
    let x_ticks: Vec<TickMark> = mapper
        .x_ticks(AXIS_TICKS)
        .into_iter()
        .map(|(pixel, value)| TickMark {
            pixel: layout.data_left + pixel * scale,
            label: format!("{value:.2}"),
        })
        .collect();
    let y_ticks: Vec<TickMark> = mapper
        .y_ticks(AXIS_TICKS)
        .into_iter()
        .map(|(pixel, value)| TickMark {
            pixel: layout.data_top + pixel * scale,
            label: format!("{value:.2}"),
        })
        .collect();
    draw_panel_axes(&chart_area, &layout, &x_ticks, &y_ticks, None, None)?;

    let visited: Vec<(f64, f64)> = trajectory
        .points()
        .iter()
        .map(|&point| to_panel(mapper.to_pixel(point)))
        .collect();
    for (from, to) in arrow_pairs(&visited) {
        draw_arrow(&chart_area, from, to, &PINK)?;
    }
    draw_visited_points(&chart_area, &visited, WHITE.filled(), MAGENTA.filled())?;
    // white endpoints get a dark rim so they stay visible on pale cells
    for &index in [0, visited.len() - 1].iter() {
        let (x, y) = visited[index];
        chart_area
            .draw(&Circle::new(
                (round_i32(x), round_i32(y)),
                ENDPOINT_RADIUS,
                ShapeStyle::from(&BLACK),
            ))
            .map_err(|e| anyhow!("failed to draw endpoint rim: {e}"))?;
    }

    Ok(())
}

fn draw_heatmap_field<DB>(
    panel: &DrawingArea<DB, Shift>,
    grid: &LandscapeGrid,
    layout: &PanelLayout,
    scale: f64,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let resolution = grid.resolution();
    let (v_min, v_max) = grid.min_max();
    for row in 0..resolution {
        for col in 0..resolution {
            let color = field_color(normalized(grid.value(row, col), v_min, v_max));
            let x0 = layout.data_left + col as f64 * scale;
            let y0 = layout.data_top + row as f64 * scale;
            let x1 = layout.data_left + (col + 1) as f64 * scale;
            let y1 = layout.data_top + (row + 1) as f64 * scale;
            panel
                .draw(&Rectangle::new(
                    [(round_i32(x0), round_i32(y0)), (round_i32(x1), round_i32(y1))],
                    color.filled(),
                ))
                .map_err(|e| anyhow!("failed to draw heatmap cell: {e}"))?;
        }
    }
    Ok(())
}

fn draw_contour_field<DB>(
    panel: &DrawingArea<DB, Shift>,
    grid: &LandscapeGrid,
    to_panel: &dyn Fn((f64, f64)) -> (f64, f64),
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (v_min, v_max) = grid.min_max();
    let levels = auto_levels(v_min, v_max, CONTOUR_LEVEL_TARGET);
    for level_lines in extract_isolines(grid, &levels) {
        let color = field_color(normalized(level_lines.level, v_min, v_max));
        for segment in &level_lines.segments {
            let start = to_panel(segment.start);
            let end = to_panel(segment.end);
            panel
                .draw(&PathElement::new(
                    to_backend_points(vec![start, end]),
                    color.stroke_width(1),
                ))
                .map_err(|e| anyhow!("failed to draw contour segment: {e}"))?;
        }

        // inline level label at a representative segment
        if let Some(segment) = level_lines.segments.get(level_lines.segments.len() / 2) {
            let (x, y) = to_panel((
                (segment.start.0 + segment.end.0) / 2.0,
                (segment.start.1 + segment.end.1) / 2.0,
            ));
            panel
                .draw(&Text::new(
                    format_tick(level_lines.level),
                    (round_i32(x), round_i32(y)),
                    ("sans-serif", TICK_FONT).into_font(),
                ))
                .map_err(|e| anyhow!("failed to draw contour label: {e}"))?;
        }
    }
    Ok(())
}

/// First and last visited points in one style, waypoints in another; a
/// single-point path still gets its endpoint highlight.
fn draw_visited_points<DB>(
    panel: &DrawingArea<DB, Shift>,
    visited: &[(f64, f64)],
    endpoint_style: ShapeStyle,
    waypoint_style: ShapeStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let last = visited.len() - 1;
    for (index, &(x, y)) in visited.iter().enumerate() {
        let (radius, style) = if index == 0 || index == last {
            (ENDPOINT_RADIUS, endpoint_style)
        } else {
            (WAYPOINT_RADIUS, waypoint_style)
        };
        panel
            .draw(&Circle::new((round_i32(x), round_i32(y)), radius, style))
            .map_err(|e| anyhow!("failed to draw visited point: {e}"))?;
    }
    Ok(())
}

/// Directional arrow in panel pixel coordinates: a shaft plus a filled
/// triangular head at the tip. Coincident points draw an empty shaft and no
/// head.
fn draw_arrow<DB>(
    panel: &DrawingArea<DB, Shift>,
    from: (f64, f64),
    to: (f64, f64),
    color: &RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1e-6 {
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);
    let head = ARROW_HEAD_PX.min(length * 0.5);
    // the shaft stops at the head base so the tip stays crisp
    let base = (to.0 - ux * head, to.1 - uy * head);
    panel
        .draw(&PathElement::new(
            to_backend_points(vec![from, base]),
            color.stroke_width(2),
        ))
        .map_err(|e| anyhow!("failed to draw arrow shaft: {e}"))?;

    let half = head * 0.45;
    let left = (base.0 - uy * half, base.1 + ux * half);
    let right = (base.0 + uy * half, base.1 - ux * half);
    panel
        .draw(&Polygon::new(
            to_backend_points(vec![to, left, right]),
            color.filled(),
        ))
        .map_err(|e| anyhow!("failed to draw arrow head: {e}"))?;
    Ok(())
}

fn draw_panel_title<DB>(title_area: &DrawingArea<DB, Shift>, title: &str) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = ("sans-serif", TITLE_FONT)
        .into_text_style(title_area)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let dims = title_area.dim_in_pixel();
    title_area
        .draw_text(title, &style, (dims.0 as i32 / 2, dims.1 as i32 / 2))
        .map_err(|e| anyhow!("failed to draw panel title: {e}"))?;
    Ok(())
}

fn draw_panel_axes<DB>(
    panel: &DrawingArea<DB, Shift>,
    layout: &PanelLayout,
    x_ticks: &[TickMark],
    y_ticks: &[TickMark],
    x_label: Option<&str>,
    y_label: Option<&str>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let frame = vec![
        (layout.data_left, layout.data_top),
        (layout.data_right, layout.data_top),
        (layout.data_right, layout.data_bottom),
        (layout.data_left, layout.data_bottom),
        (layout.data_left, layout.data_top),
    ];
    panel
        .draw(&PathElement::new(
            to_backend_points(frame),
            ShapeStyle::from(&BLACK),
        ))
        .map_err(|e| anyhow!("failed to draw panel frame: {e}"))?;

    let tick_style_bottom = ("sans-serif", TICK_FONT)
        .into_font()
        .into_text_style(panel)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let tick_style_left = ("sans-serif", TICK_FONT)
        .into_font()
        .into_text_style(panel)
        .pos(Pos::new(HPos::Right, VPos::Center));

    for tick in x_ticks {
        let line = vec![
            (tick.pixel, layout.data_bottom),
            (tick.pixel, layout.data_bottom + TICK_LENGTH_PX),
        ];
        panel
            .draw(&PathElement::new(
                to_backend_points(line),
                ShapeStyle::from(&BLACK),
            ))
            .map_err(|e| anyhow!("failed to draw x tick: {e}"))?;
        panel
            .draw_text(
                &tick.label,
                &tick_style_bottom,
                (
                    round_i32(tick.pixel),
                    round_i32(layout.data_bottom + TICK_LENGTH_PX + 4.0),
                ),
            )
            .map_err(|e| anyhow!("failed to draw x tick label: {e}"))?;
    }

    for tick in y_ticks {
        let line = vec![
            (layout.data_left, tick.pixel),
            (layout.data_left - TICK_LENGTH_PX, tick.pixel),
        ];
        panel
            .draw(&PathElement::new(
                to_backend_points(line),
                ShapeStyle::from(&BLACK),
            ))
            .map_err(|e| anyhow!("failed to draw y tick: {e}"))?;
        panel
            .draw_text(
                &tick.label,
                &tick_style_left,
                (
                    round_i32((layout.data_left - TICK_LENGTH_PX - 5.0).max(2.0)),
                    round_i32(tick.pixel),
                ),
            )
            .map_err(|e| anyhow!("failed to draw y tick label: {e}"))?;
    }

    if let Some(label) = x_label {
        let style = ("sans-serif", AXIS_FONT)
            .into_font()
            .into_text_style(panel)
            .pos(Pos::new(HPos::Center, VPos::Top));
        panel
            .draw_text(
                label,
                &style,
                (
                    round_i32(layout.data_center_x()),
                    round_i32(layout.data_bottom + 3.0 * TICK_LENGTH_PX),
                ),
            )
            .map_err(|e| anyhow!("failed to draw x axis label: {e}"))?;
    }

    if let Some(label) = y_label {
        let style = ("sans-serif", AXIS_FONT)
            .into_font()
            .into_text_style(panel)
            .transform(FontTransform::Rotate90)
            .pos(Pos::new(HPos::Center, VPos::Center));
        panel
            .draw_text(
                label,
                &style,
                (
                    round_i32((layout.data_left - 5.5 * TICK_LENGTH_PX).max(10.0)),
                    round_i32(layout.data_center_y()),
                ),
            )
            .map_err(|e| anyhow!("failed to draw y axis label: {e}"))?;
    }

    Ok(())
}

/// Pixel-space placement of a panel's data rectangle.
#[derive(Clone, Copy)]
struct PanelLayout {
    data_left: f64,
    data_right: f64,
    data_top: f64,
    data_bottom: f64,
}

impl PanelLayout {
    fn new(width: f64, height: f64) -> Self {
        let left = LEFT_MARGIN.min(width / 2.0);
        let right = RIGHT_MARGIN.min(width / 4.0);
        let top = TOP_MARGIN.min(height / 4.0);
        let bottom = BOTTOM_MARGIN.min(height / 2.0);
        Self {
            data_left: left,
            data_right: (width - right).max(left + 10.0),
            data_top: top,
            data_bottom: (height - bottom).max(top + 10.0),
        }
    }

    /// Square variant: the data rectangle shrinks to a centered square, the
    /// shape the landscape grid requires.
    fn new_square(width: f64, height: f64) -> Self {
        let rect = Self::new(width, height);
        let size = rect.data_width().min(rect.data_height());
        let extra_w = (rect.data_width() - size) / 2.0;
        let extra_h = (rect.data_height() - size) / 2.0;
        Self {
            data_left: rect.data_left + extra_w,
            data_right: rect.data_left + extra_w + size,
            data_top: rect.data_top + extra_h,
            data_bottom: rect.data_top + extra_h + size,
        }
    }

    fn data_width(&self) -> f64 {
        self.data_right - self.data_left
    }

    fn data_height(&self) -> f64 {
        self.data_bottom - self.data_top
    }

    fn data_center_x(&self) -> f64 {
        (self.data_left + self.data_right) / 2.0
    }

    fn data_center_y(&self) -> f64 {
        (self.data_top + self.data_bottom) / 2.0
    }

    fn x_pixel(&self, value: f64, lo: f64, hi: f64) -> f64 {
        let span = (hi - lo).max(f64::EPSILON);
        self.data_left + (value - lo) / span * self.data_width()
    }

    fn y_pixel(&self, value: f64, lo: f64, hi: f64) -> f64 {
        let span = (hi - lo).max(f64::EPSILON);
        self.data_bottom - (value - lo) / span * self.data_height()
    }
}

struct TickMark {
    pixel: f64,
    label: String,
}

enum Axis {
    Horizontal,
    Vertical,
}

fn tick_marks(layout: &PanelLayout, lo: f64, hi: f64, axis: Axis) -> Vec<TickMark> {
    ticks_for_range(lo, hi)
        .into_iter()
        .map(|value| TickMark {
            pixel: match axis {
                Axis::Horizontal => layout.x_pixel(value, lo, hi),
                Axis::Vertical => layout.y_pixel(value, lo, hi),
            },
            label: format_tick(value),
        })
        .collect()
}

fn ticks_for_range(min: f64, max: f64) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return vec![min];
    }
    let step = nice_number(span / (AXIS_TICKS - 1) as f64, true);
    if !(step > 0.0) {
        return vec![min, max];
    }
    let mut ticks = Vec::new();
    let mut value = (min / step).ceil() * step;
    while value <= max + 1e-9 {
        ticks.push(value);
        value += step;
    }
    if ticks.is_empty() {
        ticks.push(min);
        ticks.push(max);
    }
    ticks
}

fn format_tick(value: f64) -> String {
    if value.abs() < 1e-12 {
        return "0".to_string();
    }
    if value.abs() >= 1e4 || value.abs() < 1e-3 {
        return format!("{value:.1e}");
    }
    let mut text = format!("{value:.3}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn normalized(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Viridis-style gradient for normalized values in [0, 1], interpolated
/// between a handful of anchor colours.
fn field_color(t: f64) -> RGBColor {
    const STOPS: [(f64, (u8, u8, u8)); 5] = [
        (0.0, (68, 1, 84)),
        (0.25, (59, 82, 139)),
        (0.5, (33, 145, 140)),
        (0.75, (94, 201, 98)),
        (1.0, (253, 231, 37)),
    ];

    let t = t.clamp(0.0, 1.0);
    for window in STOPS.windows(2) {
        let (t0, c0) = window[0];
        let (t1, c1) = window[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return RGBColor(
                lerp_channel(c0.0, c1.0, f),
                lerp_channel(c0.1, c1.1, f),
                lerp_channel(c0.2, c1.2, f),
            );
        }
    }
    let (_, top) = STOPS[STOPS.len() - 1];
    RGBColor(top.0, top.1, top.2)
}

fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8
}

fn min_max<I>(values: I) -> (f64, f64)
where
    I: Iterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    (min, max)
}

fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span < 1e-9 {
        max.abs().max(1.0) * 0.05
    } else {
        span * 0.05
    };
    (min - pad, max + pad)
}

fn to_backend_points(points: Vec<(f64, f64)>) -> Vec<(i32, i32)> {
    points
        .into_iter()
        .map(|(x, y)| (round_i32(x), round_i32(y)))
        .collect()
}

fn round_i32(value: f64) -> i32 {
    value.round() as i32
}
