pub mod config;
pub mod record;
pub mod render;
pub mod viewer;
pub use config::ViewConfig;
pub use record::{EcgRecord, Lead, PeakSet, SampledSignal};
pub use render::{render_full_trace, render_trace, RenderError, RenderOutcome, Scene, TraceRequest};
pub use viewer::{LeadPanel, LeadsViewer, ViewEvent};
