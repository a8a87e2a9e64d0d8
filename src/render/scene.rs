use crate::record::PeakKind;
use crate::render::error::{Axis, RenderError};
use crate::render::grid::{self, GridLines, Tick, SMALL_SQUARE_MV, VOLTAGE_LIMIT_MV};
use crate::render::peaks::PeakOverlay;
use crate::render::scale::LinearScale;
use crate::render::slice::SignalSlice;
/// Drawable rectangle in canvas pixels. Re-derived on every render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}
impl ViewportGeometry {
    /// A `width` x `height` plot area surrounded by `padding` on every side.
    pub fn padded(width: f64, height: f64, padding: f64) -> Self {
        Self {
            left: padding,
            right: padding + width.max(0.0),
            top: padding,
            bottom: padding + height.max(0.0),
        }
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakMarker {
    pub kind: PeakKind,
    pub sample_index: usize,
    pub amplitude_mv: f64,
    pub x: f64,
    pub y: f64,
}
/// Where a scene sits on the canvas and how its time axis is labelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub area: ViewportGeometry,
    pub time_tick_step: f64,
    pub time_tick_decimals: usize,
}
/// Everything a host needs to paint one lead, in paint order: the plot area,
/// grid lines, waveform, then peak markers.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub area: ViewportGeometry,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub grid: GridLines,
    /// Waveform polyline in canvas pixels.
    pub trace: Vec<(f64, f64)>,
    pub markers: Vec<PeakMarker>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}
impl Scene {
    /// Lays out `slice` over the time range `[t_min, t_max]` and the fixed voltage range.
    pub fn compose(
        slice: &SignalSlice<'_>,
        t_min: f64,
        t_max: f64,
        layout: Layout,
        overlay: Option<&PeakOverlay>,
    ) -> Result<Self, RenderError> {
        let area = layout.area;
        let x_scale = LinearScale::new(t_min, t_max, area.left, area.right)?;
        let y_scale = LinearScale::new(-VOLTAGE_LIMIT_MV, VOLTAGE_LIMIT_MV, area.bottom, area.top)?;
        let grid = GridLines::generate(&x_scale, &y_scale, &area)?;
        let trace: Vec<(f64, f64)> = slice
            .points()
            .map(|(t, v)| (x_scale.to_pixel(t), y_scale.to_pixel(v)))
            .collect();
        let mut markers = Vec::new();
        if let Some(overlay) = overlay {
            for kind in PeakKind::ALL {
                for (sample_index, amplitude_mv) in
                    overlay.marked(kind, slice.start_index, slice.end_index)
                {
                    let t = slice.labels[sample_index - slice.start_index];
                    markers.push(PeakMarker {
                        kind,
                        sample_index,
                        amplitude_mv,
                        x: x_scale.to_pixel(t),
                        y: y_scale.to_pixel(amplitude_mv),
                    });
                }
            }
        }
        let x_ticks = grid::ticks(
            Axis::Time,
            &x_scale,
            layout.time_tick_step,
            layout.time_tick_decimals,
        )?;
        let y_ticks = grid::ticks(Axis::Voltage, &y_scale, SMALL_SQUARE_MV, 1)?;
        Ok(Self {
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            area,
            x_scale,
            y_scale,
            grid,
            trace,
            markers,
            x_ticks,
            y_ticks,
        })
    }
    /// Time and voltage under a canvas pixel, if it lies inside the plot area.
    pub fn readout(&self, px: f64, py: f64) -> Option<Readout> {
        if !self.area.contains(px, py) {
            return None;
        }
        Some(Readout {
            time_sec: self.x_scale.to_value(px),
            voltage_mv: self.y_scale.to_value(py),
        })
    }
}
/// Hover readout, formatted the way the chart tooltip shows it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub time_sec: f64,
    pub voltage_mv: f64,
}
impl Readout {
    pub fn time_label(&self) -> String {
        format!("Time: {:.2} s", self.time_sec)
    }
    pub fn voltage_label(&self) -> String {
        format!("Voltage: {:.2} mV", self.voltage_mv)
    }
}
