//! Common test utilities for b0field integration tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use b0field::{CommandRunner, Error, Invocation, ProcessOutput, Result};

/// Runner double that records every invocation and answers with a fixed outcome.
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    fail_with: Option<i32>,
    create_output: bool,
}

impl RecordingRunner {
    /// Succeeds without touching the filesystem.
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
            create_output: false,
        }
    }

    /// Succeeds and writes an empty file at the `-o` argument, like the real tool.
    pub fn writing_output() -> Self {
        Self {
            create_output: true,
            ..Self::succeeding()
        }
    }

    /// Fails with the given exit code.
    pub fn failing(code: i32) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        if let Some(code) = self.fail_with {
            return Err(Error::ExternalToolFailure {
                program: invocation.program.to_string_lossy().into_owned(),
                code: Some(code),
                stderr: "ERROR: Could not open image".to_string(),
            });
        }
        if self.create_output {
            let out = output_arg(invocation).expect("invocation has -o");
            let target = match &invocation.cwd {
                Some(dir) => dir.join(out),
                None => out,
            };
            std::fs::write(target, b"").unwrap();
        }
        Ok(ProcessOutput::default())
    }
}

/// Value following `-o` in an invocation.
pub fn output_arg(invocation: &Invocation) -> Option<PathBuf> {
    let pos = invocation.args.iter().position(|a| a == "-o")?;
    invocation.args.get(pos + 1).map(PathBuf::from)
}

/// Create an empty input image under `dir`.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").unwrap();
    path
}
