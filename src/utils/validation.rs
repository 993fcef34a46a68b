use crate::utils::error::{PatchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(field_name: &str, path: &Path, other: &Path) -> Result<()> {
    if path == other {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!("Path must differ from {}", other.display()),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PatchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_file", Path::new("countries.json")).is_ok());
        assert!(validate_path("input_file", Path::new("")).is_err());
        assert!(validate_path("input_file", Path::new("bad\0name.json")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        let a = Path::new("data/countries.json");
        let b = Path::new("data/countries.json.backup");
        assert!(validate_distinct_paths("backup_path", b, a).is_ok());
        assert!(validate_distinct_paths("backup_path", a, a).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(PathBuf::from("countries.json"));
        let missing: Option<PathBuf> = None;
        assert!(validate_required_field("input_file", &present).is_ok());
        match validate_required_field("input_file", &missing) {
            Err(PatchError::MissingConfigError { field }) => assert_eq!(field, "input_file"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
