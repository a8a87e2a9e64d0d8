use crate::config::ViewConfig;
use crate::render::error::{Axis, RenderError};
use crate::render::grid::SMALL_SQUARE_SEC;
/// Visible time span of a lead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start_sec: f64,
    pub duration_sec: f64,
}
impl Window {
    /// Negative or NaN starts are pulled back to the beginning of the record.
    pub fn new(start_sec: f64, duration_sec: f64) -> Self {
        Self {
            start_sec: if start_sec > 0.0 { start_sec } else { 0.0 },
            duration_sec,
        }
    }
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.duration_sec
    }
}
/// Turns a container width into a visible duration at a fixed paper density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowCalculator {
    pixels_per_square: f64,
    vertical_squares: u32,
    fallback_duration_sec: f64,
}
impl WindowCalculator {
    pub fn new(
        pixels_per_square: f64,
        vertical_squares: u32,
        fallback_duration_sec: f64,
    ) -> Result<Self, RenderError> {
        if !pixels_per_square.is_finite() || pixels_per_square <= 0.0 {
            return Err(RenderError::DegenerateGridSpacing {
                axis: Axis::Time,
                step_px: pixels_per_square,
            });
        }
        Ok(Self {
            pixels_per_square,
            vertical_squares,
            fallback_duration_sec,
        })
    }
    pub fn from_config(config: &ViewConfig) -> Result<Self, RenderError> {
        Self::new(
            config.pixels_per_square,
            config.vertical_squares,
            config.fallback_duration_sec,
        )
    }
    pub fn pixels_per_square(&self) -> f64 {
        self.pixels_per_square
    }
    /// Seconds of signal that fit across `container_width_px`.
    pub fn duration_for_width(&self, container_width_px: f64) -> f64 {
        if !container_width_px.is_finite() || container_width_px <= 0.0 {
            log::debug!(
                "container width {container_width_px} px, using {} s window",
                self.fallback_duration_sec
            );
            return self.fallback_duration_sec;
        }
        let squares = container_width_px / self.pixels_per_square;
        squares * SMALL_SQUARE_SEC
    }
    /// Plot height in pixels; independent of content because the voltage range is fixed.
    pub fn plot_height(&self) -> f64 {
        self.vertical_squares as f64 * self.pixels_per_square
    }
    pub fn window_for(&self, start_sec: f64, container_width_px: f64) -> Window {
        Window::new(start_sec, self.duration_for_width(container_width_px))
    }
}
