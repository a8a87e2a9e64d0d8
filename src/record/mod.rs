// src/record/mod.rs
// Data-access boundary: payload mapping and record lookup.
pub mod error;
pub mod payload;
pub mod signal;
pub mod source;
pub use error::RecordError;
pub use payload::{EcgRecord, Intervals, PatientInfo, RawLeadsResponse};
pub use signal::{Lead, PeakKind, PeakSet, SampledSignal};
pub use source::{JsonDirSource, ManualSource, RecordSource};
