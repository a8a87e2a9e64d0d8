use std::collections::HashMap;
use std::path::{Path, PathBuf};
use crate::record::error::RecordError;
use crate::record::payload::EcgRecord;
/// Anything that can look a record up by id. Retrieval itself (HTTP, auth,
/// caching) lives outside this crate.
pub trait RecordSource {
    fn fetch(&mut self, id: &str) -> Result<EcgRecord, RecordError>;
}
/// In-memory source useful for tests and deterministic playback.
#[derive(Default)]
pub struct ManualSource {
    records: HashMap<String, EcgRecord>,
}
impl ManualSource {
    pub fn new(records: impl IntoIterator<Item = (String, EcgRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
    pub fn insert(&mut self, id: impl Into<String>, record: EcgRecord) {
        self.records.insert(id.into(), record);
    }
}
impl RecordSource for ManualSource {
    fn fetch(&mut self, id: &str) -> Result<EcgRecord, RecordError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }
}
/// Reads `<dir>/<id>.json` payloads exported from the backend.
pub struct JsonDirSource {
    dir: PathBuf,
}
impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
    /// Loads a single payload file.
    pub fn load_file(path: &Path) -> Result<EcgRecord, RecordError> {
        let text = std::fs::read_to_string(path)?;
        let record = EcgRecord::from_json(&text)?;
        log::debug!(
            "loaded {} leads at {} Hz from {}",
            record.signal.leads().len(),
            record.signal.fs,
            path.display()
        );
        Ok(record)
    }
}
impl RecordSource for JsonDirSource {
    fn fetch(&mut self, id: &str) -> Result<EcgRecord, RecordError> {
        let path = self.dir.join(format!("{id}.json"));
        if !path.is_file() {
            return Err(RecordError::NotFound(id.to_string()));
        }
        Self::load_file(&path)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Lead, SampledSignal};
    #[test]
    fn manual_source_returns_known_records() {
        let record = EcgRecord::new(SampledSignal::new(250.0, vec![Lead::new("I", vec![0.0; 4])]));
        let mut source = ManualSource::new(vec![("ecg-1".to_string(), record.clone())]);
        assert_eq!(source.fetch("ecg-1").unwrap(), record);
        assert!(matches!(source.fetch("ecg-2"), Err(RecordError::NotFound(id)) if id == "ecg-2"));
    }
    #[test]
    fn json_dir_source_reads_payload_files() {
        let dir = std::env::temp_dir().join(format!("ecgview-source-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("abc.json"),
            r#"{"fs": 250, "leads": ["aVR"], "signals": [[0.1, 0.2]]}"#,
        )
        .unwrap();
        let mut source = JsonDirSource::new(&dir);
        let record = source.fetch("abc").unwrap();
        assert_eq!(record.signal.lead("aVR").unwrap().len(), 2);
        assert!(matches!(source.fetch("missing"), Err(RecordError::NotFound(_))));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
