//! Shared types used across b0field.
//! Currently the FSL image `OutputType`, which decides the extension of derived
//! output names and the `FSLOUTPUTTYPE` exported to the external tool.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    Nifti,
    #[default]
    NiftiGz,
    NiftiPair,
    NiftiPairGz,
}

impl OutputType {
    /// File extension FSL tools append for this output type.
    pub fn extension(self) -> &'static str {
        match self {
            OutputType::Nifti => ".nii",
            OutputType::NiftiGz => ".nii.gz",
            OutputType::NiftiPair => ".img",
            OutputType::NiftiPairGz => ".img.gz",
        }
    }

    /// Value understood by FSL in the `FSLOUTPUTTYPE` environment variable.
    pub fn env_value(self) -> &'static str {
        match self {
            OutputType::Nifti => "NIFTI",
            OutputType::NiftiGz => "NIFTI_GZ",
            OutputType::NiftiPair => "NIFTI_PAIR",
            OutputType::NiftiPairGz => "NIFTI_PAIR_GZ",
        }
    }

    pub fn from_env_value(value: &str) -> Result<Self> {
        match value.trim() {
            "NIFTI" => Ok(OutputType::Nifti),
            "NIFTI_GZ" => Ok(OutputType::NiftiGz),
            "NIFTI_PAIR" => Ok(OutputType::NiftiPair),
            "NIFTI_PAIR_GZ" => Ok(OutputType::NiftiPairGz),
            other => Err(Error::Config(format!(
                "unknown FSLOUTPUTTYPE '{other}' (expected NIFTI, NIFTI_GZ, NIFTI_PAIR or NIFTI_PAIR_GZ)"
            ))),
        }
    }
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.env_value())
    }
}
