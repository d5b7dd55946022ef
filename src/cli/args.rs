use clap::Parser;
use std::path::PathBuf;

use b0field::{B0CalcParams, OutputCheck, OutputType};

#[derive(Parser, Debug)]
#[command(name = "b0field", version, about = "Run FSL b0calc with typed, validated parameters")]
pub struct CliArgs {
    /// Input image, usually a tissue/air segmentation
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// B0 output volume (default: <input>_b0field with the FSL output extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON parameter preset; flags given on the command line override it
    /// (use --no-xyz / --no-direct-conv to switch off flags set by the preset)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Zeroth-order x-gradient field (per mm)
    #[arg(long, allow_hyphen_values = true)]
    pub gx: Option<f64>,

    /// Zeroth-order y-gradient field (per mm)
    #[arg(long, allow_hyphen_values = true)]
    pub gy: Option<f64>,

    /// Zeroth-order z-gradient field (per mm)
    #[arg(long, allow_hyphen_values = true)]
    pub gz: Option<f64>,

    /// Zeroth-order B0 field, x-component (Tesla)
    #[arg(long, allow_hyphen_values = true)]
    pub b0x: Option<f64>,

    /// Zeroth-order B0 field, y-component (Tesla)
    #[arg(long, allow_hyphen_values = true)]
    pub b0y: Option<f64>,

    /// Zeroth-order B0 field, z-component (Tesla)
    #[arg(long, allow_hyphen_values = true)]
    pub b0: Option<f64>,

    /// Susceptibility difference chi_tissue - chi_air
    #[arg(long, allow_hyphen_values = true)]
    pub delta: Option<f64>,

    /// Susceptibility of air
    #[arg(long, allow_hyphen_values = true)]
    pub chi0: Option<f64>,

    /// Calculate and save all 3 field components (x, y, z)
    #[arg(long, default_value_t = false)]
    pub xyz: bool,

    /// Do not calculate all 3 field components, even if the preset asks for it
    #[arg(long, default_value_t = false, conflicts_with = "xyz")]
    pub no_xyz: bool,

    /// Relative proportion to extend voxels at the boundary
    #[arg(long, allow_hyphen_values = true)]
    pub extend_boundary: Option<f64>,

    /// Use direct (image space) convolution instead of FFT
    #[arg(long, default_value_t = false)]
    pub direct_conv: bool,

    /// Use FFT convolution, even if the preset asks for direct convolution
    #[arg(long, default_value_t = false, conflicts_with = "direct_conv")]
    pub no_direct_conv: bool,

    /// FSL output type (overrides FSLOUTPUTTYPE)
    #[arg(long, value_enum)]
    pub output_type: Option<OutputType>,

    /// Directory to run b0calc in
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Print the command line and exit without running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// What to verify once b0calc exits successfully
    #[arg(long, value_enum, default_value_t = OutputCheck::Trust)]
    pub output_check: OutputCheck,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Parameters given directly on the command line.
    pub fn to_params(&self) -> B0CalcParams {
        B0CalcParams {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            gradient_x: self.gx,
            gradient_y: self.gy,
            gradient_z: self.gz,
            b0_x: self.b0x,
            b0_y: self.b0y,
            b0_z: self.b0,
            delta: self.delta,
            chi_air: self.chi0,
            compute_all_components: self.xyz,
            extend_boundary: self.extend_boundary,
            direct_convolution: self.direct_conv,
        }
    }
}
