use std::path::Path;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
/// Layout constants for the lead cards and the full-trace modal.
///
/// The clinical grid itself (0.04 s x 0.1 mV squares, +/-1.2 mV) is fixed and
/// lives in [`crate::render::grid`]; only pixel budgets are configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Size of one small square in the windowed view.
    pub pixels_per_square: f64,
    /// Small squares stacked vertically; 24 covers +/-1.2 mV at 0.1 mV.
    pub vertical_squares: u32,
    /// Window length used when no usable container width is known.
    pub fallback_duration_sec: f64,
    /// Card width assumed before the first resize notification.
    pub default_container_width_px: f64,
    /// Cards never grow wider than this.
    pub max_container_width_px: f64,
    pub plot_padding_px: f64,
    pub full_trace_px_per_sec: f64,
    pub full_trace_plot_height_px: f64,
    pub full_trace_viewport_height_px: f64,
    pub full_trace_tick_step_sec: f64,
}
impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pixels_per_square: 6.0,
            vertical_squares: 24,
            fallback_duration_sec: 2.5,
            default_container_width_px: 300.0,
            max_container_width_px: 600.0,
            plot_padding_px: 8.0,
            full_trace_px_per_sec: 400.0,
            full_trace_plot_height_px: 400.0,
            full_trace_viewport_height_px: 420.0,
            full_trace_tick_step_sec: 0.1,
        }
    }
}
impl ViewConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading view config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing view config {}", path.display()))?;
        config.validate()?;
        log::debug!("loaded view config from {}", path.display());
        Ok(config)
    }
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pixels_per_square", self.pixels_per_square),
            ("fallback_duration_sec", self.fallback_duration_sec),
            ("default_container_width_px", self.default_container_width_px),
            ("max_container_width_px", self.max_container_width_px),
            ("full_trace_px_per_sec", self.full_trace_px_per_sec),
            ("full_trace_plot_height_px", self.full_trace_plot_height_px),
            ("full_trace_viewport_height_px", self.full_trace_viewport_height_px),
            ("full_trace_tick_step_sec", self.full_trace_tick_step_sec),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if self.vertical_squares == 0 {
            bail!("vertical_squares must be at least 1");
        }
        if !self.plot_padding_px.is_finite() || self.plot_padding_px < 0.0 {
            bail!("plot_padding_px must not be negative, got {}", self.plot_padding_px);
        }
        Ok(())
    }
    /// Clamps a reported container width to the card's maximum.
    pub fn container_width(&self, reported_px: f64) -> f64 {
        reported_px.min(self.max_container_width_px)
    }
}
