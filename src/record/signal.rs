use serde::{Deserialize, Serialize};
/// One channel of a multi-lead recording, in millivolts.
#[derive(Clone, Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub samples: Vec<f64>,
}
impl Lead {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    /// Record length in seconds; zero when `fs` is unusable.
    pub fn duration_seconds(&self, fs: f64) -> f64 {
        if fs.is_finite() && fs > 0.0 {
            self.samples.len() as f64 / fs
        } else {
            0.0
        }
    }
}
/// All leads of one record. Leads share `fs` but may differ in length.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledSignal {
    pub fs: f64,
    leads: Vec<Lead>,
}
impl SampledSignal {
    /// Builds a signal, keeping the first lead of any repeated name.
    pub fn new(fs: f64, leads: impl IntoIterator<Item = Lead>) -> Self {
        let mut unique: Vec<Lead> = Vec::new();
        for lead in leads {
            if unique.iter().any(|l| l.name == lead.name) {
                log::warn!("dropping duplicate lead {}", lead.name);
                continue;
            }
            unique.push(lead);
        }
        Self { fs, leads: unique }
    }
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }
    pub fn lead(&self, name: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.name == name)
    }
    pub fn lead_names(&self) -> Vec<&str> {
        self.leads.iter().map(|l| l.name.as_str()).collect()
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeakKind {
    P,
    Q,
    R,
    S,
    T,
}
impl PeakKind {
    pub const ALL: [PeakKind; 5] = [PeakKind::P, PeakKind::Q, PeakKind::R, PeakKind::S, PeakKind::T];
    pub fn label(&self) -> &'static str {
        match self {
            PeakKind::P => "P Peaks",
            PeakKind::Q => "Q Peaks",
            PeakKind::R => "R Peaks",
            PeakKind::S => "S Peaks",
            PeakKind::T => "T Peaks",
        }
    }
    pub(crate) fn slot(&self) -> usize {
        match self {
            PeakKind::P => 0,
            PeakKind::Q => 1,
            PeakKind::R => 2,
            PeakKind::S => 3,
            PeakKind::T => 4,
        }
    }
}
/// Detected wave landmarks, as sample indices into one lead.
///
/// Indices come from a separate detector and may be out of range; consumers
/// ignore those instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakSet {
    #[serde(rename = "P", default)]
    pub p: Vec<i64>,
    #[serde(rename = "Q", default)]
    pub q: Vec<i64>,
    #[serde(rename = "R", default)]
    pub r: Vec<i64>,
    #[serde(rename = "S", default)]
    pub s: Vec<i64>,
    #[serde(rename = "T", default)]
    pub t: Vec<i64>,
}
impl PeakSet {
    pub fn indices(&self, kind: PeakKind) -> &[i64] {
        match kind {
            PeakKind::P => &self.p,
            PeakKind::Q => &self.q,
            PeakKind::R => &self.r,
            PeakKind::S => &self.s,
            PeakKind::T => &self.t,
        }
    }
    pub fn is_empty(&self) -> bool {
        PeakKind::ALL.iter().all(|k| self.indices(*k).is_empty())
    }
}
