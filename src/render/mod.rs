// src/render/mod.rs
// Calibrated ECG grid rendering and windowing.
pub mod error;
pub mod full_trace;
pub mod grid;
pub mod outcome;
pub mod peaks;
pub mod plot;
pub mod scale;
pub mod scene;
pub mod slice;
pub mod trace;
pub mod window;
// Re-exported so hosts only need `ecgview::render::*`.
pub use error::{Axis, RenderError};
pub use full_trace::{render_full_trace, FullTraceModal};
pub use grid::{GridLine, GridLines, Tick, BOLD_EVERY, SMALL_SQUARE_MV, SMALL_SQUARE_SEC, VOLTAGE_LIMIT_MV};
pub use outcome::{Fallback, RenderOutcome};
pub use peaks::PeakOverlay;
pub use plot::{render_scene_png, PlotStyle};
pub use scale::LinearScale;
pub use scene::{Layout, PeakMarker, Readout, Scene, ViewportGeometry};
pub use slice::{slice_all, slice_window, SignalSlice};
pub use trace::{render_trace, TraceRequest};
pub use window::{Window, WindowCalculator};
