//! High-level library API: the `B0Calc` interface, which validates parameters,
//! resolves the output name, builds the `b0calc` command line and runs it through
//! a `CommandRunner`. Prefer these entrypoints over the `core` primitives.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{FslConfig, OUTPUT_TYPE_VAR};
use crate::core::args::build_args;
use crate::core::naming::resolve_output_path;
use crate::core::params::B0CalcParams;
use crate::core::validate::validate;
use crate::error::{Error, Result};
use crate::io::{CommandRunner, Invocation};

/// Name of the FSL executable wrapped by this crate.
pub const PROGRAM: &str = "b0calc";

/// What to do about the output file once the tool exits successfully.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
pub enum OutputCheck {
    /// Rely on the exit status alone
    #[default]
    Trust,
    /// Fail with `Error::OutputMissing` if the file was not written
    RequireExists,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct B0CalcOutput {
    /// Absolute path of the B0 field volume
    pub output_path: PathBuf,
}

/// One configured `b0calc` call.
#[derive(Debug, Clone)]
pub struct B0Calc {
    params: B0CalcParams,
    config: FslConfig,
    working_dir: Option<PathBuf>,
    output_check: OutputCheck,
}

impl B0Calc {
    pub fn new(params: B0CalcParams) -> Self {
        Self {
            params,
            config: FslConfig::default(),
            working_dir: None,
            output_check: OutputCheck::default(),
        }
    }

    pub fn with_config(mut self, config: FslConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the tool in `dir`. Relative inputs and derived outputs live there.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_output_check(mut self, check: OutputCheck) -> Self {
        self.output_check = check;
        self
    }

    pub fn params(&self) -> &B0CalcParams {
        &self.params
    }

    pub fn config(&self) -> &FslConfig {
        &self.config
    }

    pub fn output_check(&self) -> OutputCheck {
        self.output_check
    }

    /// Absolute directory the tool runs in. A relative working directory is
    /// taken relative to the current one.
    fn base_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Output path as passed to the tool: explicit value, or the derived bare name.
    fn output_arg(&self) -> Result<PathBuf> {
        let input = self
            .params
            .input_path
            .as_deref()
            .ok_or(Error::MissingRequiredParameter { name: "input_path" })?;
        Ok(resolve_output_path(
            input,
            self.params.output_path.as_deref(),
            self.config.output_type,
        ))
    }

    /// Validated argument list, program name excluded.
    pub fn args(&self) -> Result<Vec<OsString>> {
        let base = self.base_dir()?;
        let input = validate(&self.params, &base)?;
        let output = self.output_arg()?;
        Ok(build_args(input, &output, &self.params))
    }

    pub fn invocation(&self) -> Result<Invocation> {
        Ok(Invocation {
            program: self.config.program(PROGRAM),
            args: self.args()?,
            cwd: self.working_dir.clone(),
            env: vec![(
                OUTPUT_TYPE_VAR.to_string(),
                self.config.output_type.env_value().to_string(),
            )],
        })
    }

    /// The full command line, e.g. for logging or a dry run.
    pub fn cmdline(&self) -> Result<String> {
        Ok(self.invocation()?.cmdline())
    }

    /// Outputs this call will produce, computed without running anything.
    pub fn list_outputs(&self) -> Result<B0CalcOutput> {
        let output = self.output_arg()?;
        Ok(B0CalcOutput {
            output_path: absolutize(&self.base_dir()?, &output),
        })
    }

    /// Validate, run the tool once, and report the output path.
    ///
    /// Validation errors are returned before the runner is touched; runner
    /// errors are passed through unchanged.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<B0CalcOutput> {
        let invocation = self.invocation()?;
        let outputs = self.list_outputs()?;

        info!("Running: {}", invocation.cmdline());
        let result = runner.run(&invocation)?;
        if !result.stderr.trim().is_empty() {
            debug!("{PROGRAM} stderr: {}", result.stderr.trim_end());
        }

        if self.output_check == OutputCheck::RequireExists && !outputs.output_path.exists() {
            return Err(Error::OutputMissing {
                path: outputs.output_path,
            });
        }

        info!("B0 field written to {}", outputs.output_path.display());
        Ok(outputs)
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Run `b0calc` once with `params` in the current directory.
pub fn calculate_b0_field(
    params: B0CalcParams,
    config: FslConfig,
    runner: &dyn CommandRunner,
) -> Result<B0CalcOutput> {
    B0Calc::new(params).with_config(config).run(runner)
}
