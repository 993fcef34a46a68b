use crate::domain::ports::Storage;
use crate::utils::error::{PatchError, Result};
use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Filesystem storage. `replace_file` stages the new content in a temporary
/// file next to the target before the original is moved to its backup.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    staging_dir: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage replacements in `dir` instead of the target's directory. The
    /// final rename only stays atomic when `dir` is on the same filesystem.
    pub fn with_staging_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: Some(dir.into()),
        }
    }

    fn stage(&self, path: &Path, data: &[u8], permissions: Permissions) -> Result<NamedTempFile> {
        let dir = match (&self.staging_dir, path.parent()) {
            (Some(dir), _) => dir.as_path(),
            (None, Some(parent)) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |source: std::io::Error| PatchError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(data).map_err(write_err)?;
        // temp files are created 0600; the replacement keeps the original's mode
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;
        tracing::debug!("Staged {} bytes at {}", data.len(), staged.path().display());
        Ok(staged)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PatchError::NotFound {
                path: path.to_path_buf(),
            },
            _ => PatchError::IoError(e),
        })
    }

    fn backup_file(&self, path: &Path, backup: &Path) -> Result<()> {
        let backup_err = |reason: String| PatchError::Backup {
            path: path.to_path_buf(),
            backup: backup.to_path_buf(),
            reason,
        };

        // rename(2) silently replaces an existing destination
        match fs::symlink_metadata(backup) {
            Ok(_) => return Err(backup_err("destination already exists".to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(backup_err(e.to_string())),
        }

        fs::rename(path, backup).map_err(|e| backup_err(e.to_string()))?;
        tracing::debug!("Moved {} to {}", path.display(), backup.display());
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn replace_file(&self, path: &Path, backup: &Path, data: &[u8]) -> Result<()> {
        if backup.exists() {
            return Err(PatchError::Backup {
                path: path.to_path_buf(),
                backup: backup.to_path_buf(),
                reason: "destination already exists".to_string(),
            });
        }

        let permissions = match fs::metadata(path) {
            Ok(metadata) => metadata.permissions(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PatchError::Backup {
                    path: path.to_path_buf(),
                    backup: backup.to_path_buf(),
                    reason: "source missing".to_string(),
                })
            }
            Err(e) => return Err(PatchError::IoError(e)),
        };

        let staged = self.stage(path, data, permissions)?;
        self.backup_file(path, backup)?;
        staged.persist(path).map_err(|e| PatchError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}
