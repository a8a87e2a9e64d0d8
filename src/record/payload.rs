use std::collections::BTreeMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::record::error::RecordError;
use crate::record::signal::{Lead, PeakSet, SampledSignal};
/// Lead payload exactly as the backend sends it: lead names and sample arrays
/// in two parallel lists, with patient and interval fields flattened alongside.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLeadsResponse {
    pub fs: Option<f64>,
    pub leads: Vec<String>,
    pub signals: Vec<Vec<f64>>,
    pub patient_name: Option<String>,
    #[serde(deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub upload_date: Option<String>,
    pub classification: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub p_wave_duration: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub pq_interval: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub qrs_duration: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub qt_interval: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub confidence: Option<f64>,
    pub notes: Option<String>,
    /// Detected landmarks keyed by lead name.
    pub peaks: BTreeMap<String, PeakSet>,
}
/// Numeric metadata is informational only; a value of the wrong shape is
/// logged and dropped so the waveforms still load.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Some(other) => {
            log::warn!("ignoring non-numeric metadata value {other}");
            None
        }
    })
}
/// Ages are whole years; fractional values are truncated.
fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(lenient_number(deserializer)?
        .filter(|years| (0.0..=u32::MAX as f64).contains(years))
        .map(|years| years.trunc() as u32))
}
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientInfo {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub upload_date: Option<String>,
}
/// Measured intervals, in milliseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intervals {
    pub p_wave_duration_ms: Option<f64>,
    pub pq_interval_ms: Option<f64>,
    pub qrs_duration_ms: Option<f64>,
    pub qt_interval_ms: Option<f64>,
}
/// A fetched record, read-only for the lifetime of the view.
#[derive(Clone, Debug, PartialEq)]
pub struct EcgRecord {
    pub signal: SampledSignal,
    pub patient: PatientInfo,
    pub intervals: Intervals,
    pub classification: Option<String>,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: Option<f64>,
    pub notes: Option<String>,
    pub peaks: BTreeMap<String, PeakSet>,
}
impl EcgRecord {
    pub fn new(signal: SampledSignal) -> Self {
        Self {
            signal,
            patient: PatientInfo::default(),
            intervals: Intervals::default(),
            classification: None,
            confidence: None,
            notes: None,
            peaks: BTreeMap::new(),
        }
    }
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let raw: RawLeadsResponse = serde_json::from_str(text)?;
        Ok(Self::from_raw(raw))
    }
    /// Maps the raw payload field by field.
    ///
    /// Missing `fs` becomes 0 (rendered later as an invalid-rate fallback), a
    /// lead name without a sample array becomes an empty lead, and arrays
    /// without a name are dropped.
    pub fn from_raw(raw: RawLeadsResponse) -> Self {
        let fs = raw.fs.unwrap_or_else(|| {
            log::warn!("record payload has no sampling frequency");
            0.0
        });
        if raw.signals.len() > raw.leads.len() {
            log::warn!(
                "dropping {} unnamed signal arrays",
                raw.signals.len() - raw.leads.len()
            );
        }
        let mut signals = raw.signals.into_iter();
        let leads: Vec<Lead> = raw
            .leads
            .into_iter()
            .map(|name| {
                let samples = signals.next().unwrap_or_else(|| {
                    log::warn!("lead {name} has no samples in payload");
                    Vec::new()
                });
                Lead::new(name, samples)
            })
            .collect();
        Self {
            signal: SampledSignal::new(fs, leads),
            patient: PatientInfo {
                name: raw.patient_name,
                age: raw.age,
                gender: raw.gender,
                upload_date: raw.upload_date,
            },
            intervals: Intervals {
                p_wave_duration_ms: raw.p_wave_duration,
                pq_interval_ms: raw.pq_interval,
                qrs_duration_ms: raw.qrs_duration,
                qt_interval_ms: raw.qt_interval,
            },
            classification: raw.classification,
            confidence: raw.confidence,
            notes: raw.notes,
            peaks: raw.peaks,
        }
    }
    pub fn is_normal(&self) -> bool {
        self.classification.as_deref() == Some("Normal")
    }
    /// Confidence as a whole percentage, e.g. `"87%"`.
    pub fn confidence_label(&self) -> String {
        match self.confidence {
            Some(c) if c.is_finite() => format!("{}%", (c * 100.0).round()),
            _ => "-".to_string(),
        }
    }
    /// Header lines describing the patient, intervals and classification.
    pub fn summary_lines(&self) -> Vec<String> {
        fn or_dash<T: std::fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "-".to_string(), |v| v.to_string())
        }
        vec![
            format!("Patient: {}", or_dash(&self.patient.name)),
            format!("Age: {}", or_dash(&self.patient.age)),
            format!("Gender: {}", or_dash(&self.patient.gender)),
            format!("Uploaded: {}", or_dash(&self.patient.upload_date)),
            format!("QRS: {} ms", or_dash(&self.intervals.qrs_duration_ms)),
            format!("QT: {} ms", or_dash(&self.intervals.qt_interval_ms)),
            format!("PQ: {} ms", or_dash(&self.intervals.pq_interval_ms)),
            format!("P-wave: {} ms", or_dash(&self.intervals.p_wave_duration_ms)),
            format!("Result: {}", or_dash(&self.classification)),
            format!("Confidence: {}", self.confidence_label()),
            format!("Note: {}", self.notes.as_deref().unwrap_or("-")),
        ]
    }
}
