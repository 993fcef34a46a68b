use crate::config::WriteMode;
use crate::domain::model::{PersistOutcome, Record, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Moves `path` to `backup`. Must fail, leaving both untouched, when
    /// `backup` already exists.
    fn backup_file(&self, path: &Path, backup: &Path) -> Result<()>;

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Backs up `path` and puts `data` in its place. Storages that can stage
    /// the new content first should override this.
    fn replace_file(&self, path: &Path, backup: &Path, data: &[u8]) -> Result<()> {
        self.backup_file(path, backup)?;
        self.write_file(path, data)
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn write_mode(&self) -> WriteMode;
    fn dry_run(&self) -> bool;
    fn monitor(&self) -> bool;
}

pub trait Pipeline {
    fn load(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: Vec<Record>) -> Result<TransformResult>;
    fn persist(&self, result: &TransformResult) -> Result<PersistOutcome>;
}
