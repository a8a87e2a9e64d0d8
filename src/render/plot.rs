use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use crate::record::PeakKind;
use crate::render::error::RenderError;
use crate::render::scene::Scene;
/// Largest canvas edge the painter accepts, in pixels.
const MAX_CANVAS_EDGE: f64 = 32_768.0;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub background: RGBColor,
    /// Fill of the plot area, the "paper".
    pub paper: RGBColor,
    pub minor_line: RGBColor,
    pub bold_line: RGBColor,
    pub trace: RGBColor,
    pub marker_radius: i32,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            paper: RGBColor(0xff, 0xf5, 0xf5),
            minor_line: RGBColor(0xff, 0xdd, 0xdd),
            bold_line: RGBColor(0xff, 0xaa, 0xaa),
            trace: BLACK,
            marker_radius: 5,
        }
    }
}
impl PlotStyle {
    pub fn peak_color(&self, kind: PeakKind) -> RGBColor {
        match kind {
            PeakKind::P => RED,
            PeakKind::Q => RGBColor(128, 0, 128),
            PeakKind::R => BLACK,
            PeakKind::S => BLUE,
            PeakKind::T => RGBColor(0, 128, 0),
        }
    }
}
/// Paints a scene in order (paper, minor lines, bold lines, waveform, peak
/// markers) and encodes it as PNG.
pub fn render_scene_png(scene: &Scene, style: &PlotStyle) -> Result<Vec<u8>, RenderError> {
    let (width, height) = canvas_size(scene)?;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let area = scene.area;
        let (left, right) = (px(area.left), px(area.right));
        let (top, bottom) = (px(area.top), px(area.bottom));
        root.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            style.paper.filled(),
        ))?;
        // Bold lines go last so minor lines never paint over them.
        for bold in [false, true] {
            let color = if bold { style.bold_line } else { style.minor_line };
            for line in scene.grid.vertical.iter().filter(|l| l.bold == bold) {
                let x = px(line.position);
                root.draw(&PathElement::new(vec![(x, top), (x, bottom)], color.stroke_width(1)))?;
            }
            for line in scene.grid.horizontal.iter().filter(|l| l.bold == bold) {
                let y = px(line.position);
                root.draw(&PathElement::new(vec![(left, y), (right, y)], color.stroke_width(1)))?;
            }
        }
        let points: Vec<(i32, i32)> = scene
            .trace
            .iter()
            .map(|&(x, y)| (px(x), px(y.clamp(area.top, area.bottom))))
            .collect();
        if points.len() > 1 {
            root.draw(&PathElement::new(points, style.trace.stroke_width(1)))?;
        }
        for marker in &scene.markers {
            root.draw(&Circle::new(
                (px(marker.x), px(marker.y)),
                style.marker_radius,
                style.peak_color(marker.kind).filled(),
            ))?;
        }
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
fn canvas_size(scene: &Scene) -> Result<(u32, u32), RenderError> {
    let fits = |edge: f64| edge.is_finite() && edge >= 1.0 && edge <= MAX_CANVAS_EDGE;
    if !fits(scene.canvas_width) || !fits(scene.canvas_height) {
        return Err(RenderError::Plot(format!(
            "canvas of {}x{} px cannot be painted",
            scene.canvas_width, scene.canvas_height
        )));
    }
    Ok((
        scene.canvas_width.ceil() as u32,
        scene.canvas_height.ceil() as u32,
    ))
}
fn px(value: f64) -> i32 {
    value.round() as i32
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| RenderError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::record::{Lead, PeakSet};
    use crate::render::full_trace::render_full_trace;
    use crate::render::trace::{render_trace, TraceRequest};
    fn lead() -> Lead {
        Lead::new("II", (0..2500).map(|i| (i as f64 / 30.0).sin()).collect())
    }
    #[test]
    fn windowed_scene_paints_to_png() {
        let lead = lead();
        let peaks = PeakSet {
            r: vec![50, 400],
            ..PeakSet::default()
        };
        let request = TraceRequest::new(&lead, 500.0).peaks(&peaks);
        let scene = render_trace(&request, &ViewConfig::default()).unwrap();
        let png = render_scene_png(&scene, &PlotStyle::default()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), scene.canvas_width.ceil() as u32);
        assert_eq!(decoded.height(), 160);
    }
    #[test]
    fn paper_and_bold_lines_use_grid_colors() {
        let lead = lead();
        let scene = render_trace(
            &TraceRequest::new(&lead, 500.0).size(300.0, 144.0),
            &ViewConfig::default(),
        )
        .unwrap();
        let png = render_scene_png(&scene, &PlotStyle::default()).unwrap();
        let image = image::load_from_memory(&png).unwrap().to_rgb8();
        // The first vertical line sits on t = 0, a large-square boundary.
        let bold_x = scene.grid.vertical[0].position.round() as u32;
        assert_eq!(image.get_pixel(bold_x, 20).0, [0xff, 0xaa, 0xaa]);
        assert_eq!(image.get_pixel(0, 0).0, [0xff, 0xff, 0xff]);
    }
    #[test]
    fn full_trace_paints_whole_record() {
        let lead = lead();
        let scene = render_full_trace(&lead, 500.0, &ViewConfig::default()).unwrap();
        let png = render_scene_png(&scene, &PlotStyle::default()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 2000);
        assert_eq!(decoded.height(), 400);
    }
}
