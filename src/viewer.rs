use crate::config::ViewConfig;
use crate::record::EcgRecord;
use crate::render::{
    render_trace, FullTraceModal, RenderError, RenderOutcome, Scene, TraceRequest,
    WindowCalculator,
};
/// Messages the host sends when its geometry or the user's selection changes.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// A lead card's container was resized.
    Resized { width_px: f64 },
    /// Move every card's window to start at `start_sec`.
    Seek { start_sec: f64 },
    OpenModal { lead: String },
    CloseModal,
    /// The modal's scroll viewport was resized.
    ModalResized { width_px: f64 },
    ScrollModal { delta_px: f64 },
}
/// One lead card of the grid view.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadPanel {
    pub lead: String,
    pub outcome: RenderOutcome<Scene>,
}
/// Browsing state for one loaded record.
///
/// The record is read-only; only the container width, window start and modal change, and
/// every panel is recomputed from those on demand.
pub struct LeadsViewer {
    record: EcgRecord,
    config: ViewConfig,
    calculator: WindowCalculator,
    container_width_px: f64,
    start_sec: f64,
    modal_viewport_px: f64,
    modal: Option<FullTraceModal>,
}
impl LeadsViewer {
    pub fn new(record: EcgRecord, config: ViewConfig) -> Result<Self, RenderError> {
        let calculator = WindowCalculator::from_config(&config)?;
        let container_width_px = config.container_width(config.default_container_width_px);
        Ok(Self {
            record,
            calculator,
            container_width_px,
            start_sec: 0.0,
            modal_viewport_px: container_width_px,
            config,
            modal: None,
        })
    }
    pub fn record(&self) -> &EcgRecord {
        &self.record
    }
    pub fn container_width(&self) -> f64 {
        self.container_width_px
    }
    pub fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Resized { width_px } => {
                self.container_width_px = self.config.container_width(width_px);
            }
            ViewEvent::Seek { start_sec } => {
                self.start_sec = if start_sec > 0.0 { start_sec } else { 0.0 };
            }
            ViewEvent::OpenModal { lead } => {
                let Some(found) = self.record.signal.lead(&lead) else {
                    log::warn!("cannot open unknown lead {lead}");
                    return;
                };
                self.modal = Some(FullTraceModal::open(
                    found,
                    self.record.signal.fs,
                    self.modal_viewport_px,
                    &self.config,
                ));
            }
            ViewEvent::CloseModal => self.modal = None,
            ViewEvent::ModalResized { width_px } => {
                self.modal_viewport_px = width_px.max(0.0);
                if let Some(modal) = &mut self.modal {
                    modal.resize(self.modal_viewport_px);
                }
            }
            ViewEvent::ScrollModal { delta_px } => {
                if let Some(modal) = &mut self.modal {
                    modal.scroll_by(delta_px);
                }
            }
        }
    }
    /// Windowed view of every lead at the current container width and start.
    pub fn panels(&self) -> Vec<LeadPanel> {
        let fs = self.record.signal.fs;
        let window = self.calculator.window_for(self.start_sec, self.container_width_px);
        let height = self.calculator.plot_height();
        self.record
            .signal
            .leads()
            .iter()
            .map(|lead| {
                let mut request = TraceRequest::new(lead, fs).window(window);
                // An unusable width leaves the plot sized from the fallback duration.
                if self.container_width_px.is_finite() && self.container_width_px > 0.0 {
                    request = request.size(self.container_width_px, height);
                } else {
                    request.height = Some(height);
                }
                if let Some(peaks) = self.record.peaks.get(&lead.name) {
                    request = request.peaks(peaks);
                }
                LeadPanel {
                    lead: lead.name.clone(),
                    outcome: RenderOutcome::from_result(&lead.name, render_trace(&request, &self.config)),
                }
            })
            .collect()
    }
    pub fn modal(&self) -> Option<&FullTraceModal> {
        self.modal.as_ref()
    }
}
