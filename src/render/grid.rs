//! Clinical ECG paper grid.
//!
//! One small square is 0.04 s wide and 0.1 mV tall (25 mm/s, 10 mm/mV paper).
//! Every fifth line marks a large square (0.2 s, 0.5 mV) and is drawn bold.
//! Lines are anchored on data zero, so a plot area that starts mid-second still
//! shows lines on exact 0.04 s boundaries, as if the paper were infinite and
//! the plot area clipped it.
use crate::render::error::{Axis, RenderError};
use crate::render::scale::LinearScale;
use crate::render::scene::ViewportGeometry;
/// Seconds covered by one small square.
pub const SMALL_SQUARE_SEC: f64 = 0.04;
/// Millivolts covered by one small square.
pub const SMALL_SQUARE_MV: f64 = 0.1;
/// Every n-th line (counted from zero) is bold.
pub const BOLD_EVERY: i64 = 5;
/// The voltage axis always spans +/- this many millivolts.
pub const VOLTAGE_LIMIT_MV: f64 = 1.2;
/// Upper bound on lines per axis; anything denser is treated as degenerate.
const MAX_LINES_PER_AXIS: f64 = 100_000.0;
/// Tolerance applied at the plot area edges, in squares.
const EDGE_EPSILON: f64 = 1e-9;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Pixel coordinate (x for vertical lines, y for horizontal lines).
    pub position: f64,
    pub bold: bool,
}
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}
impl GridLines {
    pub fn generate(
        x: &LinearScale,
        y: &LinearScale,
        area: &ViewportGeometry,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            vertical: vertical_lines(x, area)?,
            horizontal: horizontal_lines(y, area)?,
        })
    }
}
pub fn vertical_lines(x: &LinearScale, area: &ViewportGeometry) -> Result<Vec<GridLine>, RenderError> {
    let step = x.pixels_per_unit() * SMALL_SQUARE_SEC;
    anchored_lines(Axis::Time, x.to_pixel(0.0), step, area.left, area.right)
}
pub fn horizontal_lines(
    y: &LinearScale,
    area: &ViewportGeometry,
) -> Result<Vec<GridLine>, RenderError> {
    // Pixel y grows downwards, so one millivolt is to_pixel(0) - to_pixel(1).
    let step = -y.pixels_per_unit() * SMALL_SQUARE_MV;
    anchored_lines(Axis::Voltage, y.to_pixel(0.0), step, area.top, area.bottom)
}
fn anchored_lines(
    axis: Axis,
    zero: f64,
    step: f64,
    lo: f64,
    hi: f64,
) -> Result<Vec<GridLine>, RenderError> {
    let (first, last) = square_indices(axis, zero, step, lo, hi)?;
    Ok((first..=last)
        .map(|k| GridLine {
            position: zero + k as f64 * step,
            bold: k.rem_euclid(BOLD_EVERY) == 0,
        })
        .collect())
}
/// Inclusive range of zero-anchored square indices whose lines fall in `[lo, hi]`.
fn square_indices(
    axis: Axis,
    zero: f64,
    step: f64,
    lo: f64,
    hi: f64,
) -> Result<(i64, i64), RenderError> {
    if !step.is_finite() || step <= 0.0 || !zero.is_finite() {
        log::warn!("skipping {axis} grid: spacing of {step} px per square");
        return Err(RenderError::DegenerateGridSpacing { axis, step_px: step });
    }
    let first = ((lo - zero) / step - EDGE_EPSILON).ceil();
    let last = ((hi - zero) / step + EDGE_EPSILON).floor();
    if last - first > MAX_LINES_PER_AXIS {
        log::warn!(
            "skipping {axis} grid: {} lines at {step} px per square",
            last - first + 1.0
        );
        return Err(RenderError::DegenerateGridSpacing { axis, step_px: step });
    }
    Ok((first as i64, last as i64))
}
/// An axis label at a data value that falls inside the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub value: f64,
    pub label: String,
}
/// Ticks every `step` data units, anchored on zero like the grid lines.
pub fn ticks(
    axis: Axis,
    scale: &LinearScale,
    step: f64,
    decimals: usize,
) -> Result<Vec<Tick>, RenderError> {
    let step_px = scale.pixels_per_unit().abs() * step;
    if !step_px.is_finite() || step_px <= 0.0 {
        return Err(RenderError::DegenerateGridSpacing { axis, step_px });
    }
    // Indices are counted in data units here, not pixels.
    let (first, last) = square_indices(axis, 0.0, step, scale.min(), scale.max())?;
    Ok((first..=last)
        .map(|k| {
            let value = k as f64 * step;
            Tick {
                position: scale.to_pixel(value),
                value,
                label: format!("{:.*}", decimals, value),
            }
        })
        .collect())
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    fn area(left: f64, right: f64, top: f64, bottom: f64) -> ViewportGeometry {
        ViewportGeometry {
            left,
            right,
            top,
            bottom,
        }
    }
    #[test]
    fn six_pixel_squares_from_a_four_second_window() {
        let plot = area(0.0, 600.0, 0.0, 144.0);
        let x = LinearScale::new(0.0, 4.0, plot.left, plot.right).unwrap();
        let lines = vertical_lines(&x, &plot).unwrap();
        assert_eq!(lines.len(), 101);
        assert!((lines[1].position - lines[0].position - 6.0).abs() < 1e-9);
        let bold: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.bold)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(bold, (0..=100).step_by(5).collect::<Vec<_>>());
    }
    #[test]
    fn horizontal_lines_bold_through_zero_millivolts() {
        let plot = area(0.0, 600.0, 0.0, 144.0);
        let y = LinearScale::new(-VOLTAGE_LIMIT_MV, VOLTAGE_LIMIT_MV, plot.bottom, plot.top).unwrap();
        let lines = horizontal_lines(&y, &plot).unwrap();
        assert_eq!(lines.len(), 25);
        let zero = lines
            .iter()
            .find(|l| (l.position - 72.0).abs() < 1e-9)
            .unwrap();
        assert!(zero.bold);
        // +/-1.0 mV lie two large squares away from zero.
        assert_eq!(lines.iter().filter(|l| l.bold).count(), 5);
    }
    #[test]
    fn window_starting_mid_square_stays_on_zero_anchored_boundaries() {
        let plot = area(10.0, 610.0, 0.0, 144.0);
        let x = LinearScale::new(0.13, 4.13, plot.left, plot.right).unwrap();
        let lines = vertical_lines(&x, &plot).unwrap();
        for line in &lines {
            let t = x.to_value(line.position);
            let squares = t / SMALL_SQUARE_SEC;
            assert!((squares - squares.round()).abs() < 1e-6);
            let large = (squares.round() as i64).rem_euclid(BOLD_EVERY) == 0;
            assert_eq!(line.bold, large);
        }
        let first = x.to_value(lines[0].position);
        assert!((first - 0.16).abs() < 1e-9);
    }
    #[test]
    fn boldness_is_independent_of_left_offset() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let left = rng.gen_range(-400.0..400.0);
            let width = rng.gen_range(50.0..1200.0);
            let start = rng.gen_range(-3.0..8.0);
            let plot = area(left, left + width, 0.0, 144.0);
            let x = LinearScale::new(start, start + width / 150.0, plot.left, plot.right).unwrap();
            let lines = vertical_lines(&x, &plot).unwrap();
            let zero = x.to_pixel(0.0);
            for line in &lines {
                let k = ((line.position - zero) / 6.0).round() as i64;
                assert_eq!(line.bold, k.rem_euclid(5) == 0);
                assert!(line.position >= plot.left - 1e-6 && line.position <= plot.right + 1e-6);
            }
        }
    }
    #[test]
    fn zero_width_plot_is_degenerate() {
        let plot = area(8.0, 8.0, 0.0, 144.0);
        let x = LinearScale::new(0.0, 2.5, plot.left, plot.right).unwrap();
        let err = vertical_lines(&x, &plot).unwrap_err();
        assert!(matches!(
            err,
            RenderError::DegenerateGridSpacing {
                axis: Axis::Time,
                ..
            }
        ));
    }
    #[test]
    fn zero_height_plot_is_degenerate() {
        let plot = area(0.0, 600.0, 72.0, 72.0);
        let y = LinearScale::new(-VOLTAGE_LIMIT_MV, VOLTAGE_LIMIT_MV, plot.bottom, plot.top).unwrap();
        assert!(matches!(
            horizontal_lines(&y, &plot),
            Err(RenderError::DegenerateGridSpacing {
                axis: Axis::Voltage,
                ..
            })
        ));
    }
    #[test]
    fn too_many_lines_are_refused() {
        // One pixel per second leaves 0.04 px squares: 2.5 million lines.
        let plot = area(0.0, 100_000.0, 0.0, 144.0);
        let x = LinearScale::new(0.0, 100_000.0, plot.left, plot.right).unwrap();
        assert!(matches!(
            vertical_lines(&x, &plot),
            Err(RenderError::DegenerateGridSpacing {
                axis: Axis::Time,
                ..
            })
        ));
        // Exactly at the cap still draws.
        let x = LinearScale::new(0.0, 4_000.0, plot.left, plot.right).unwrap();
        assert_eq!(vertical_lines(&x, &plot).unwrap().len(), 100_001);
    }
    #[test]
    fn tick_labels_follow_step_precision() {
        let x = LinearScale::new(0.0, 1.0, 0.0, 400.0).unwrap();
        let labels: Vec<String> = ticks(Axis::Time, &x, 0.1, 1)
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "0.0");
        assert_eq!(labels[3], "0.3");
        assert_eq!(labels[10], "1.0");
        let y = LinearScale::new(-1.2, 1.2, 400.0, 0.0).unwrap();
        let y_ticks = ticks(Axis::Voltage, &y, 0.1, 1).unwrap();
        assert_eq!(y_ticks.len(), 25);
        assert_eq!(y_ticks[0].label, "-1.2");
        assert_eq!(y_ticks[12].label, "0.0");
    }
}
