use crate::config::backup_path_for;
use crate::core::patcher;
use crate::core::{ConfigProvider, PersistOutcome, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::Result;

pub struct SubregionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SubregionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SubregionPipeline<S, C> {
    fn load(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Loading country records from {}", path.display());
        let records = patcher::load_with(&self.storage, path)?;
        tracing::info!("Loaded {} country records", records.len());
        Ok(records)
    }

    fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let result = patcher::transform(data);
        for update in &result.updates {
            tracing::debug!("Updated {}: {} -> {}", update.name, update.from, update.to);
        }
        Ok(result)
    }

    fn persist(&self, result: &TransformResult) -> Result<PersistOutcome> {
        let path = self.config.input_path();
        tracing::debug!(
            "Persisting {} records to {} ({:?} write, backup at {})",
            result.records.len(),
            path.display(),
            self.config.write_mode(),
            backup_path_for(path).display()
        );
        let outcome =
            patcher::persist_with(&self.storage, path, &result.records, self.config.write_mode())?;
        tracing::info!("Created backup of original file at: {}", outcome.backup_path.display());
        Ok(outcome)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{PatchSettings, WriteMode};
    use crate::utils::error::PatchError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(crate) struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        pub(crate) fn with_file(path: &str, data: &[u8]) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), data.to_vec());
            storage
        }

        pub(crate) fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }

        pub(crate) fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| PatchError::NotFound {
                    path: path.to_path_buf(),
                })
        }

        fn backup_file(&self, path: &Path, backup: &Path) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            if files.contains_key(backup) {
                return Err(PatchError::Backup {
                    path: path.to_path_buf(),
                    backup: backup.to_path_buf(),
                    reason: "destination already exists".to_string(),
                });
            }
            let data = files.remove(path).ok_or_else(|| PatchError::Backup {
                path: path.to_path_buf(),
                backup: backup.to_path_buf(),
                reason: "source missing".to_string(),
            })?;
            files.insert(backup.to_path_buf(), data);
            Ok(())
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(PatchError::Write {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::Other, "disk full"),
                });
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_load_from_storage() {
        let storage = MockStorage::with_file(
            "countries.json",
            br#"[{"name": "Chad", "subregion": "Other"}]"#,
        );
        let pipeline = SubregionPipeline::new(storage, PatchSettings::new("countries.json"));

        let records = pipeline.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), Some("Chad"));
    }

    #[test]
    fn test_load_missing_file() {
        let pipeline =
            SubregionPipeline::new(MockStorage::default(), PatchSettings::new("countries.json"));
        assert!(matches!(pipeline.load(), Err(PatchError::NotFound { .. })));
    }

    #[test]
    fn test_persist_moves_original_to_backup() {
        let original = br#"[{"name": "Chad", "subregion": "Other"}]"#;
        let storage = MockStorage::with_file("countries.json", original);
        let pipeline = SubregionPipeline::new(storage.clone(), PatchSettings::new("countries.json"));

        let records = pipeline.load().unwrap();
        let result = pipeline.transform(records).unwrap();
        let outcome = pipeline.persist(&result).unwrap();

        assert_eq!(outcome.backup_path, PathBuf::from("countries.json.backup"));
        assert_eq!(storage.get_file("countries.json.backup").unwrap(), original);

        let written: serde_json::Value =
            serde_json::from_slice(&storage.get_file("countries.json").unwrap()).unwrap();
        assert_eq!(written, json!([{"name": "Chad", "subregion": "Middle Africa"}]));
    }

    #[test]
    fn test_direct_write_failure_keeps_backup() {
        let original = br#"[]"#;
        let storage = MockStorage::with_file("countries.json", original).failing_writes();
        let settings = PatchSettings::new("countries.json").with_write_mode(WriteMode::Direct);
        let pipeline = SubregionPipeline::new(storage.clone(), settings);

        let result = pipeline.transform(Vec::new()).unwrap();
        let err = pipeline.persist(&result).unwrap_err();

        assert!(matches!(err, PatchError::Write { .. }));
        assert_eq!(storage.get_file("countries.json.backup").unwrap(), original);
        assert!(storage.get_file("countries.json").is_none());
    }
}
