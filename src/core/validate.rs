use std::path::{Path, PathBuf};

use crate::core::params::B0CalcParams;
use crate::error::{Error, Result};

/// Check the mandatory input and return it.
///
/// Relative inputs are looked up under `base_dir`, the directory the tool will
/// run in, and must name a regular file (symlinks are followed). The returned
/// path is the one given by the caller, unmodified.
pub fn validate<'a>(params: &'a B0CalcParams, base_dir: &Path) -> Result<&'a Path> {
    let input = params
        .input_path
        .as_deref()
        .ok_or(Error::MissingRequiredParameter { name: "input_path" })?;

    let located: PathBuf = if input.is_absolute() {
        input.to_path_buf()
    } else {
        base_dir.join(input)
    };
    if !located.exists() {
        return Err(Error::PathNotFound { path: located });
    }
    if !located.is_file() {
        return Err(Error::NotAFile { path: located });
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_reported_by_name() {
        let err = validate(&B0CalcParams::default(), Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredParameter { name: "input_path" }));
    }

    #[test]
    fn absent_file_is_path_not_found() {
        let params = B0CalcParams::new("/no/such/file.nii");
        let err = validate(&params, Path::new(".")).unwrap_err();
        match err {
            Error::PathNotFound { path } => assert_eq!(path, PathBuf::from("/no/such/file.nii")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_input_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("seg.nii")).unwrap();
        let params = B0CalcParams::new("seg.nii");

        match validate(&params, dir.path()).unwrap_err() {
            Error::NotAFile { path } => assert_eq!(path, dir.path().join("seg.nii")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn relative_input_resolves_against_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seg.nii"), b"").unwrap();
        let params = B0CalcParams::new("seg.nii");

        assert_eq!(validate(&params, dir.path()).unwrap(), Path::new("seg.nii"));
        assert!(matches!(
            validate(&params, &dir.path().join("elsewhere")),
            Err(Error::PathNotFound { .. })
        ));
    }
}
