use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_GRADIENT: f64 = 0.0;
pub const DEFAULT_B0_XY: f64 = 0.0;
pub const DEFAULT_B0_Z: f64 = 1.0;
pub const DEFAULT_DELTA: f64 = -9.45e-6;
pub const DEFAULT_CHI_AIR: f64 = 4.0e-7;
pub const DEFAULT_EXTEND_BOUNDARY: f64 = 1.0;

/// Inputs of a single `b0calc` run, suitable for JSON presets and the CLI.
///
/// Numeric fields left as `None` are not passed to the tool, which then applies
/// its own default (see the `effective_*` accessors).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct B0CalcParams {
    /// Input image, usually a tissue/air segmentation
    pub input_path: Option<PathBuf>,
    /// B0 output volume; derived from `input_path` when unset
    pub output_path: Option<PathBuf>,
    /// Zeroth-order gradient field components (per mm)
    pub gradient_x: Option<f64>,
    pub gradient_y: Option<f64>,
    pub gradient_z: Option<f64>,
    /// Zeroth-order B0 field components, in Tesla
    pub b0_x: Option<f64>,
    pub b0_y: Option<f64>,
    pub b0_z: Option<f64>,
    /// chi_tissue - chi_air
    pub delta: Option<f64>,
    pub chi_air: Option<f64>,
    /// Save all three field components instead of z only
    pub compute_all_components: bool,
    /// Relative proportion to extend voxels at the boundary
    pub extend_boundary: Option<f64>,
    /// Image-space convolution instead of FFT
    pub direct_convolution: bool,
}

impl B0CalcParams {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: Some(input_path.into()),
            ..Self::default()
        }
    }

    /// Load a preset from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn effective_gradient(&self) -> [f64; 3] {
        [
            self.gradient_x.unwrap_or(DEFAULT_GRADIENT),
            self.gradient_y.unwrap_or(DEFAULT_GRADIENT),
            self.gradient_z.unwrap_or(DEFAULT_GRADIENT),
        ]
    }

    pub fn effective_b0(&self) -> [f64; 3] {
        [
            self.b0_x.unwrap_or(DEFAULT_B0_XY),
            self.b0_y.unwrap_or(DEFAULT_B0_XY),
            self.b0_z.unwrap_or(DEFAULT_B0_Z),
        ]
    }

    pub fn effective_delta(&self) -> f64 {
        self.delta.unwrap_or(DEFAULT_DELTA)
    }

    pub fn effective_chi_air(&self) -> f64 {
        self.chi_air.unwrap_or(DEFAULT_CHI_AIR)
    }

    pub fn effective_extend_boundary(&self) -> f64 {
        self.extend_boundary.unwrap_or(DEFAULT_EXTEND_BOUNDARY)
    }

    /// Overlay every field set in `other` onto `self`. Booleans are only ever switched on.
    pub fn merge(mut self, other: B0CalcParams) -> Self {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        take(&mut self.input_path, other.input_path);
        take(&mut self.output_path, other.output_path);
        take(&mut self.gradient_x, other.gradient_x);
        take(&mut self.gradient_y, other.gradient_y);
        take(&mut self.gradient_z, other.gradient_z);
        take(&mut self.b0_x, other.b0_x);
        take(&mut self.b0_y, other.b0_y);
        take(&mut self.b0_z, other.b0_z);
        take(&mut self.delta, other.delta);
        take(&mut self.chi_air, other.chi_air);
        take(&mut self.extend_boundary, other.extend_boundary);
        self.compute_all_components |= other.compute_all_components;
        self.direct_convolution |= other.direct_convolution;
        self
    }
}
