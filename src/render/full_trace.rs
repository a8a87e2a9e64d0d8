//! Fixed-density view of a whole lead, shown in a horizontally scrolling modal.
use crate::config::ViewConfig;
use crate::record::Lead;
use crate::render::error::RenderError;
use crate::render::outcome::RenderOutcome;
use crate::render::scene::{Layout, Scene, ViewportGeometry};
use crate::render::slice::slice_all;
/// Lays out the complete record at `full_trace_px_per_sec`, independent of any
/// container width.
pub fn render_full_trace(lead: &Lead, fs: f64, config: &ViewConfig) -> Result<Scene, RenderError> {
    let slice = slice_all(&lead.samples, fs)?;
    let duration_sec = lead.duration_seconds(fs);
    let width = duration_sec * config.full_trace_px_per_sec;
    let height = config.full_trace_plot_height_px;
    let layout = Layout {
        canvas_width: width,
        canvas_height: height,
        area: ViewportGeometry::padded(width, height, 0.0),
        time_tick_step: config.full_trace_tick_step_sec,
        time_tick_decimals: 1,
    };
    Scene::compose(&slice, 0.0, duration_sec, layout, None)
}
/// Open full-trace modal: the rendered lead plus its horizontal scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct FullTraceModal {
    lead_name: String,
    content: RenderOutcome<Scene>,
    viewport_width: f64,
    viewport_height: f64,
    scroll_left: f64,
}
impl FullTraceModal {
    /// Opening always starts at the beginning of the record.
    pub fn open(lead: &Lead, fs: f64, viewport_width: f64, config: &ViewConfig) -> Self {
        let content = RenderOutcome::from_result(&lead.name, render_full_trace(lead, fs, config));
        Self {
            lead_name: lead.name.clone(),
            content,
            viewport_width: viewport_width.max(0.0),
            viewport_height: config.full_trace_viewport_height_px,
            scroll_left: 0.0,
        }
    }
    pub fn lead_name(&self) -> &str {
        &self.lead_name
    }
    pub fn content(&self) -> &RenderOutcome<Scene> {
        &self.content
    }
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }
    pub fn content_width(&self) -> f64 {
        self.content.ready().map_or(0.0, |scene| scene.canvas_width)
    }
    pub fn max_scroll(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }
    pub fn scroll_to(&mut self, x: f64) {
        self.scroll_left = if x.is_finite() {
            x.clamp(0.0, self.max_scroll())
        } else {
            0.0
        };
    }
    pub fn scroll_by(&mut self, delta_px: f64) {
        self.scroll_to(self.scroll_left + delta_px);
    }
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.scroll_to(self.scroll_left);
    }
    /// Seconds visible through the viewport at the current scroll offset.
    pub fn visible_time_range(&self) -> Option<(f64, f64)> {
        let scene = self.content.ready()?;
        let right = (self.scroll_left + self.viewport_width).min(scene.canvas_width);
        Some((
            scene.x_scale.to_value(self.scroll_left),
            scene.x_scale.to_value(right),
        ))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn ten_second_lead() -> Lead {
        Lead::new("V5", (0..5000).map(|i| (i as f64 / 40.0).cos()).collect())
    }
    #[test]
    fn ten_seconds_are_four_thousand_pixels_wide() {
        let lead = ten_second_lead();
        let scene = render_full_trace(&lead, 500.0, &ViewConfig::default()).unwrap();
        assert!((scene.canvas_width - 4000.0).abs() < 1e-9);
        assert_eq!(scene.canvas_height, 400.0);
        assert_eq!(scene.trace.len(), 5000);
        assert_eq!(scene.x_ticks.len(), 101);
        assert_eq!(scene.x_ticks[15].label, "1.5");
        assert_eq!(scene.y_ticks.len(), 25);
        let v = &scene.grid.vertical;
        assert!((v[1].position - v[0].position - 16.0).abs() < 1e-9);
    }
    #[test]
    fn width_ignores_the_modal_viewport() {
        let lead = ten_second_lead();
        let config = ViewConfig::default();
        let narrow = FullTraceModal::open(&lead, 500.0, 320.0, &config);
        let wide = FullTraceModal::open(&lead, 500.0, 1280.0, &config);
        assert_eq!(narrow.content_width(), wide.content_width());
        assert_eq!(narrow.viewport_height(), 420.0);
    }
    #[test]
    fn scrolling_is_clamped_and_reset_on_open() {
        let lead = ten_second_lead();
        let config = ViewConfig::default();
        let mut modal = FullTraceModal::open(&lead, 500.0, 1000.0, &config);
        modal.scroll_by(250.0);
        assert_eq!(modal.scroll_left(), 250.0);
        modal.scroll_by(10_000.0);
        assert!((modal.scroll_left() - 3000.0).abs() < 1e-9);
        let (start, end) = modal.visible_time_range().unwrap();
        assert!((start - 7.5).abs() < 1e-9);
        assert!((end - 10.0).abs() < 1e-9);
        modal.scroll_by(-99_999.0);
        assert_eq!(modal.scroll_left(), 0.0);
        modal.scroll_to(800.0);
        let reopened = FullTraceModal::open(&lead, 500.0, 1000.0, &config);
        assert_eq!(reopened.scroll_left(), 0.0);
    }
    #[test]
    fn resize_keeps_scroll_in_range() {
        let lead = ten_second_lead();
        let mut modal = FullTraceModal::open(&lead, 500.0, 1000.0, &ViewConfig::default());
        modal.scroll_to(3000.0);
        modal.resize(2000.0);
        assert!((modal.scroll_left() - 2000.0).abs() < 1e-9);
    }
    #[test]
    fn invalid_rate_opens_as_fallback() {
        let lead = ten_second_lead();
        let mut modal = FullTraceModal::open(&lead, 0.0, 1000.0, &ViewConfig::default());
        assert_eq!(
            modal.content().fallback().unwrap().message(),
            "Invalid sampling frequency"
        );
        modal.scroll_by(100.0);
        assert_eq!(modal.scroll_left(), 0.0);
        assert!(modal.visible_time_range().is_none());
    }
}
