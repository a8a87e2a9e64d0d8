use thiserror::Error;
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid sampling frequency: {fs} Hz")]
    InvalidSamplingRate { fs: f64 },
    #[error("lead has no samples")]
    NoSamples,
    #[error("window selects no samples (start index {start_index}, end index {end_index})")]
    EmptyWindow {
        start_index: usize,
        end_index: usize,
    },
    #[error("invalid axis range: max {max} must be greater than min {min}")]
    InvalidRange { min: f64, max: f64 },
    #[error("degenerate {axis} grid spacing: {step_px} px per square")]
    DegenerateGridSpacing { axis: Axis, step_px: f64 },
    #[error("failed to paint scene: {0}")]
    Plot(String),
}
/// Which axis of the plot a grid or scale belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Time,
    Voltage,
}
impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Time => f.write_str("time"),
            Axis::Voltage => f.write_str("voltage"),
        }
    }
}
impl RenderError {
    /// Text shown in place of a chart when rendering `lead` failed.
    pub fn fallback_message(&self, lead: &str) -> String {
        match self {
            RenderError::InvalidSamplingRate { .. } => "Invalid sampling frequency".to_string(),
            RenderError::NoSamples => format!("No ECG data available for lead {lead}"),
            RenderError::EmptyWindow { .. } => {
                format!("No samples in the selected window for lead {lead}")
            }
            RenderError::InvalidRange { .. } => format!("Invalid axis range for lead {lead}"),
            RenderError::DegenerateGridSpacing { .. } => {
                format!("Plot area too small to draw the grid for lead {lead}")
            }
            RenderError::Plot(_) => format!("Unable to draw lead {lead}"),
        }
    }
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for RenderError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        RenderError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for RenderError {
    fn from(value: image::ImageError) -> Self {
        RenderError::Plot(value.to_string())
    }
}
