#![doc = r#"
b0field — a typed interface to FSL's `b0calc`.

`b0calc` (part of FSL/POSSUM) simulates the B0 field inhomogeneity produced by a
tissue/air segmentation. This crate does not reimplement the simulation: it
declares the tool's parameters as a typed record, validates them, derives the
default output name, renders the exact command line the tool expects and runs
it through a pluggable `CommandRunner`. It powers the `b0field` CLI and can be
embedded in your own pipelines.

Requirements
------------
- An FSL installation providing `b0calc`, located via `FSLDIR` or `PATH`.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use b0field::{B0Calc, B0CalcParams, FslConfig, SystemRunner};

fn main() -> b0field::Result<()> {
    let params = B0CalcParams {
        b0_z: Some(3.0),
        ..B0CalcParams::new("tissue+air_map.nii")
    };
    let out = B0Calc::new(params)
        .with_config(FslConfig::from_env()?)
        .run(&SystemRunner)?;
    println!("{}", out.output_path.display());
    Ok(())
}
```

Inspect the command line without running it
--------------------------------------------
```rust,no_run
use b0field::{B0Calc, B0CalcParams};

fn main() -> b0field::Result<()> {
    let calc = B0Calc::new(B0CalcParams::new("tissue+air_map.nii"));
    // b0calc -i tissue+air_map.nii -o tissue+air_map_b0field.nii.gz
    println!("{}", calc.cmdline()?);
    Ok(())
}
```

Error handling
--------------
All public functions return `b0field::Result<T>`. Validation failures
(`MissingRequiredParameter`, `PathNotFound`, `NotAFile`) are raised before any process is
started; `ExternalToolFailure` carries the exit code and stderr of `b0calc`.

```rust,no_run
use b0field::{B0Calc, B0CalcParams, Error, SystemRunner};

fn main() {
    match B0Calc::new(B0CalcParams::new("/bad/path.nii")).run(&SystemRunner) {
        Ok(out) => println!("{}", out.output_path.display()),
        Err(Error::PathNotFound { path }) => eprintln!("no such input: {}", path.display()),
        Err(Error::ExternalToolFailure { code, stderr, .. }) => {
            eprintln!("b0calc failed ({code:?}): {stderr}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the `B0Calc` interface.
- [`core`] — parameters, validation, output naming and argument building.
- [`config`] — `FSLDIR` / `FSLOUTPUTTYPE` handling.
- [`io`] — the `CommandRunner` seam.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use api::{B0Calc, B0CalcOutput, OutputCheck, PROGRAM, calculate_b0_field};
pub use config::FslConfig;
pub use crate::core::params::B0CalcParams;
pub use error::{Error, Result};
pub use io::{CommandRunner, Invocation, ProcessOutput, SystemRunner};
pub use types::OutputType;
