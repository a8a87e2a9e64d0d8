use crate::render::error::RenderError;
use crate::render::window::Window;
/// Visible part of a lead with synchronized time labels.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalSlice<'a> {
    pub start_index: usize,
    pub end_index: usize,
    /// `labels[i] = (start_index + i) / fs`, in seconds.
    pub labels: Vec<f64>,
    pub values: &'a [f64],
}
impl SignalSlice<'_> {
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}
pub fn is_valid_sampling_rate(fs: f64) -> bool {
    fs.is_finite() && fs > 0.0
}
/// Extracts the samples covered by `window`.
///
/// A window that starts past the end of the record selects nothing and is
/// reported as [`RenderError::EmptyWindow`]; the start is never clamped back
/// into the record.
pub fn slice_window(samples: &[f64], fs: f64, window: Window) -> Result<SignalSlice<'_>, RenderError> {
    if !is_valid_sampling_rate(fs) {
        return Err(RenderError::InvalidSamplingRate { fs });
    }
    if samples.is_empty() {
        return Err(RenderError::NoSamples);
    }
    // Float to usize casts saturate, so negative products land on zero.
    let start_index = (window.start_sec * fs).floor().max(0.0) as usize;
    let end_index = ((window.end_sec() * fs).floor().max(0.0) as usize).min(samples.len());
    if start_index >= end_index {
        return Err(RenderError::EmptyWindow {
            start_index,
            end_index,
        });
    }
    let labels = (start_index..end_index).map(|i| i as f64 / fs).collect();
    log::debug!(
        "sliced samples {start_index}..{end_index} of {} at {fs} Hz",
        samples.len()
    );
    Ok(SignalSlice {
        start_index,
        end_index,
        labels,
        values: &samples[start_index..end_index],
    })
}
/// The whole lead as one slice, for views that show the complete record.
pub fn slice_all(samples: &[f64], fs: f64) -> Result<SignalSlice<'_>, RenderError> {
    if !is_valid_sampling_rate(fs) {
        return Err(RenderError::InvalidSamplingRate { fs });
    }
    if samples.is_empty() {
        return Err(RenderError::NoSamples);
    }
    Ok(SignalSlice {
        start_index: 0,
        end_index: samples.len(),
        labels: (0..samples.len()).map(|i| i as f64 / fs).collect(),
        values: samples,
    })
}
