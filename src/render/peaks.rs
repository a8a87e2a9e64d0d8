use crate::record::{PeakKind, PeakSet};
/// Dense per-kind overlay channels aligned with a lead's samples.
///
/// Every channel has the lead's length; an entry holds the sample amplitude at
/// a listed peak and `None` everywhere else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeakOverlay {
    channels: [Vec<Option<f64>>; 5],
}
impl PeakOverlay {
    pub fn build(signal: &[f64], peaks: &PeakSet) -> Self {
        let mut overlay = Self {
            channels: std::array::from_fn(|_| vec![None; signal.len()]),
        };
        for kind in PeakKind::ALL {
            let channel = &mut overlay.channels[kind.slot()];
            for &index in peaks.indices(kind) {
                match usize::try_from(index).ok().filter(|i| *i < signal.len()) {
                    Some(i) => channel[i] = Some(signal[i]),
                    None => log::debug!(
                        "ignoring {} index {index} outside 0..{}",
                        kind.label(),
                        signal.len()
                    ),
                }
            }
        }
        overlay
    }
    pub fn channel(&self, kind: PeakKind) -> &[Option<f64>] {
        &self.channels[kind.slot()]
    }
    /// Marked samples of one kind inside `start..end`, as `(index, amplitude)`.
    pub fn marked(
        &self,
        kind: PeakKind,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = (usize, f64)> + '_ {
        let channel = self.channel(kind);
        let end = end.min(channel.len());
        let start = start.min(end);
        channel[start..end]
            .iter()
            .enumerate()
            .filter_map(move |(offset, value)| value.map(|v| (start + offset, v)))
    }
}
