use crate::config::ViewConfig;
use crate::record::{Lead, PeakSet};
use crate::render::error::RenderError;
use crate::render::grid::SMALL_SQUARE_SEC;
use crate::render::peaks::PeakOverlay;
use crate::render::scene::{Layout, Scene, ViewportGeometry};
use crate::render::slice::slice_window;
use crate::render::window::{Window, WindowCalculator};
/// Parameters of the windowed lead view. Unset fields take the card defaults.
#[derive(Clone, Copy, Debug)]
pub struct TraceRequest<'a> {
    pub lead: &'a Lead,
    pub fs: f64,
    pub start_sec: Option<f64>,
    pub duration_sec: Option<f64>,
    /// Plot area width in pixels.
    pub width: Option<f64>,
    /// Plot area height in pixels.
    pub height: Option<f64>,
    pub peaks: Option<&'a PeakSet>,
}
impl<'a> TraceRequest<'a> {
    pub fn new(lead: &'a Lead, fs: f64) -> Self {
        Self {
            lead,
            fs,
            start_sec: None,
            duration_sec: None,
            width: None,
            height: None,
            peaks: None,
        }
    }
    pub fn window(mut self, window: Window) -> Self {
        self.start_sec = Some(window.start_sec);
        self.duration_sec = Some(window.duration_sec);
        self
    }
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
    pub fn peaks(mut self, peaks: &'a PeakSet) -> Self {
        self.peaks = Some(peaks);
        self
    }
}
/// Lays out the visible window of one lead on clinical paper.
pub fn render_trace(request: &TraceRequest<'_>, config: &ViewConfig) -> Result<Scene, RenderError> {
    let calculator = WindowCalculator::from_config(config)?;
    let window = Window::new(
        request.start_sec.unwrap_or(0.0),
        request
            .duration_sec
            .unwrap_or(config.fallback_duration_sec),
    );
    let slice = slice_window(&request.lead.samples, request.fs, window)?;
    // Without an explicit width the plot is sized so one square is exactly
    // `pixels_per_square` wide.
    let width = request.width.unwrap_or_else(|| {
        window.duration_sec / SMALL_SQUARE_SEC * calculator.pixels_per_square()
    });
    let height = request.height.unwrap_or_else(|| calculator.plot_height());
    let padding = config.plot_padding_px;
    let layout = Layout {
        canvas_width: width.max(0.0) + 2.0 * padding,
        canvas_height: height.max(0.0) + 2.0 * padding,
        area: ViewportGeometry::padded(width, height, padding),
        time_tick_step: SMALL_SQUARE_SEC,
        time_tick_decimals: 2,
    };
    let overlay = request
        .peaks
        .map(|peaks| PeakOverlay::build(&request.lead.samples, peaks));
    let scene = Scene::compose(
        &slice,
        window.start_sec,
        window.end_sec(),
        layout,
        overlay.as_ref(),
    )?;
    log::debug!(
        "lead {}: {} samples over {:.2} s at {:.0}x{:.0} px",
        request.lead.name,
        slice.len(),
        window.duration_sec,
        width,
        height
    );
    Ok(scene)
}
#[cfg(test)]
mod tests {
    use super::*;
    fn lead() -> Lead {
        Lead::new("II", (0..5000).map(|i| (i as f64 / 80.0).sin()).collect())
    }
    #[test]
    fn defaults_show_two_and_a_half_seconds_on_six_pixel_squares() {
        let lead = lead();
        let scene = render_trace(&TraceRequest::new(&lead, 500.0), &ViewConfig::default()).unwrap();
        assert_eq!(scene.trace.len(), 1250);
        assert!((scene.area.width() - 375.0).abs() < 1e-9);
        assert_eq!(scene.area.height(), 144.0);
        assert_eq!(scene.canvas_height, 160.0);
        let v = &scene.grid.vertical;
        assert!((v[1].position - v[0].position - 6.0).abs() < 1e-9);
    }
    #[test]
    fn container_width_drives_duration() {
        let lead = lead();
        let config = ViewConfig::default();
        let calc = WindowCalculator::from_config(&config).unwrap();
        let window = calc.window_for(2.0, 600.0);
        let request = TraceRequest::new(&lead, 500.0)
            .window(window)
            .size(600.0, calc.plot_height());
        let scene = render_trace(&request, &config).unwrap();
        assert_eq!(scene.trace.len(), 2000);
        assert!((scene.x_scale.min() - 2.0).abs() < 1e-12);
        assert!((scene.x_scale.max() - 6.0).abs() < 1e-9);
    }
    #[test]
    fn zero_sampling_rate_never_slices() {
        let lead = lead();
        let err = render_trace(&TraceRequest::new(&lead, 0.0), &ViewConfig::default()).unwrap_err();
        assert_eq!(err, RenderError::InvalidSamplingRate { fs: 0.0 });
    }
    #[test]
    fn peaks_become_markers() {
        let lead = lead();
        let peaks = PeakSet {
            r: vec![100, 900, 4000],
            t: vec![300],
            ..PeakSet::default()
        };
        let request = TraceRequest::new(&lead, 500.0).peaks(&peaks);
        let scene = render_trace(&request, &ViewConfig::default()).unwrap();
        let indices: Vec<usize> = scene.markers.iter().map(|m| m.sample_index).collect();
        assert_eq!(indices, vec![100, 900, 300]);
    }
    #[test]
    fn zero_width_plot_falls_back_to_degenerate_grid() {
        let lead = lead();
        let request = TraceRequest::new(&lead, 500.0).size(0.0, 144.0);
        assert!(matches!(
            render_trace(&request, &ViewConfig::default()),
            Err(RenderError::DegenerateGridSpacing { .. })
        ));
    }
}
