//! FSL environment configuration.
//!
//! FSL tools are located through `FSLDIR` and write images in the format named by
//! `FSLOUTPUTTYPE`. Both are read once into an `FslConfig`; tests build one from
//! an explicit lookup instead of the process environment.
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::types::OutputType;

pub const FSLDIR_VAR: &str = "FSLDIR";
pub const OUTPUT_TYPE_VAR: &str = "FSLOUTPUTTYPE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FslConfig {
    /// FSL installation root, if known
    pub fsl_dir: Option<PathBuf>,
    pub output_type: OutputType,
}

impl FslConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fsl_dir = get(FSLDIR_VAR).map(PathBuf::from);
        let output_type = match get(OUTPUT_TYPE_VAR) {
            Some(v) => OutputType::from_env_value(&v)?,
            None => {
                debug!("{OUTPUT_TYPE_VAR} not set, defaulting to {}", OutputType::default());
                OutputType::default()
            }
        };
        Ok(Self {
            fsl_dir,
            output_type,
        })
    }

    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    /// Path of an FSL executable: `$FSLDIR/bin/<name>` when present, else the bare
    /// name for a `PATH` lookup.
    pub fn program(&self, name: &str) -> PathBuf {
        if let Some(dir) = &self.fsl_dir {
            let candidate = dir.join("bin").join(name);
            if candidate.is_file() {
                return candidate;
            }
            debug!("{} missing, falling back to PATH", candidate.display());
        }
        PathBuf::from(name)
    }

    /// Installed FSL version from `$FSLDIR/etc/fslversion`.
    pub fn fsl_version(&self) -> Option<String> {
        let file = self.fsl_dir.as_ref()?.join("etc").join("fslversion");
        let text = std::fs::read_to_string(file).ok()?;
        let first = text.lines().next()?.trim();
        (!first.is_empty()).then(|| first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = FslConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, FslConfig::default());
        assert_eq!(cfg.program("b0calc"), PathBuf::from("b0calc"));
        assert_eq!(cfg.fsl_version(), None);
    }

    #[test]
    fn output_type_is_read_from_environment() {
        let cfg = FslConfig::from_lookup(lookup(&[("FSLOUTPUTTYPE", "NIFTI")])).unwrap();
        assert_eq!(cfg.output_type, OutputType::Nifti);
    }

    #[test]
    fn bad_output_type_is_rejected() {
        let err = FslConfig::from_lookup(lookup(&[("FSLOUTPUTTYPE", "MINC")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn program_and_version_come_from_fsldir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bin")).unwrap();
        std::fs::create_dir_all(dir.path().join("etc")).unwrap();
        std::fs::write(dir.path().join("bin/b0calc"), b"").unwrap();
        std::fs::write(dir.path().join("etc/fslversion"), "6.0.7.4\n").unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let cfg = FslConfig::from_lookup(lookup(&[("FSLDIR", root.as_str())])).unwrap();

        assert_eq!(cfg.program("b0calc"), dir.path().join("bin/b0calc"));
        assert_eq!(cfg.program("possum"), PathBuf::from("possum"));
        assert_eq!(cfg.fsl_version().as_deref(), Some("6.0.7.4"));
    }
}
