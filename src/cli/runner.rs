use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use b0field::{B0Calc, B0CalcParams, FslConfig, SystemRunner};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Preset (if any) overlaid with the flags given on the command line.
fn collect_params(args: &CliArgs) -> Result<B0CalcParams, AppError> {
    let preset = match &args.params {
        Some(path) => {
            info!("Loading parameter preset: {:?}", path);
            B0CalcParams::from_json_file(path)?
        }
        None => B0CalcParams::default(),
    };
    let mut params = preset.merge(args.to_params());
    if args.no_xyz {
        params.compute_all_components = false;
    }
    if args.no_direct_conv {
        params.direct_convolution = false;
    }
    if params.input_path.is_none() {
        return Err(AppError::MissingArgument {
            arg: "--input".to_string(),
        });
    }
    Ok(params)
}

fn build_calc(args: &CliArgs) -> Result<B0Calc, AppError> {
    let params = collect_params(args)?;

    let mut config = FslConfig::from_env()?;
    if let Some(output_type) = args.output_type {
        config = config.with_output_type(output_type);
    }

    let mut calc = B0Calc::new(params).with_config(config);
    if let Some(cwd) = &args.cwd {
        if !cwd.is_dir() {
            return Err(AppError::MissingWorkingDir { path: cwd.clone() });
        }
        calc = calc.in_dir(cwd);
    }
    calc = calc.with_output_check(args.output_check);
    Ok(calc)
}

fn execute(args: CliArgs) -> Result<(), AppError> {
    let calc = build_calc(&args)?;

    if args.dry_run {
        println!("{}", calc.cmdline()?);
        return Ok(());
    }

    match calc.config().fsl_version() {
        Some(version) => info!("FSL version: {}", version),
        None => warn!("FSL version unknown (FSLDIR unset or etc/fslversion missing)"),
    }

    let output = calc.run(&SystemRunner)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.output_path.display());
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }
    execute(args)?;
    Ok(())
}
