use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A fully prepared external call: program, ordered arguments, working
/// directory and environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn cmdline(&self) -> String {
        crate::core::args::join_cmdline(&self.program.to_string_lossy(), &self.args)
    }
}

/// Captured streams of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Abstraction over external command execution, so the driver can be
/// exercised without FSL installed.
///
/// Implementations block until the process exits and return
/// `Error::ExternalToolFailure` for a non-zero exit status.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// Runs invocations with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        let program = invocation.program.to_string_lossy().into_owned();
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        debug!("Spawning: {}", invocation.cmdline());
        let output = cmd.output().map_err(|source| Error::Spawn {
            program: program.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            warn!("{} failed with {:?}", program, output.status.code());
            return Err(Error::ExternalToolFailure {
                program,
                code: output.status.code(),
                stderr: stderr.trim_end().to_string(),
            });
        }
        Ok(ProcessOutput { stdout, stderr })
    }
}
