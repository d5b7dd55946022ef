//! Token building for the `b0calc` command line.
//!
//! Token order and numeric formatting are fixed by the tool's grammar:
//! `-i <in> -o <out> [--gx=F] [--gy=F] [--gz=F] [--b0x=F] [--b0y=F] [--b0=F]
//! [-d E] [--chi0=E] [--xyz] [--extendboundary=F] [--directconv]`.
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::core::params::B0CalcParams;

/// Fixed-point rendering, `%.<precision>f` in C terms.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    format!("{value:.precision$}")
}

/// Scientific rendering matching C `%e`: six fraction digits and a signed
/// exponent of at least two digits, e.g. `-9.450000e-06`.
pub fn format_scientific(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let rendered = format!("{value:.6e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Build the ordered argument list (program name excluded).
///
/// `output` is the already resolved output path. Paths are passed through as
/// raw OS strings. Numeric fields render only when set; boolean flags render
/// bare when true and not at all when false.
pub fn build_args(input: &Path, output: &Path, params: &B0CalcParams) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-i".into(),
        input.as_os_str().to_os_string(),
        "-o".into(),
        output.as_os_str().to_os_string(),
    ];

    let fixed = [
        ("--gx=", params.gradient_x, 4),
        ("--gy=", params.gradient_y, 4),
        ("--gz=", params.gradient_z, 4),
        ("--b0x=", params.b0_x, 2),
        ("--b0y=", params.b0_y, 2),
        ("--b0=", params.b0_z, 2),
    ];
    for (flag, value, precision) in fixed {
        if let Some(v) = value {
            args.push(format!("{flag}{}", format_fixed(v, precision)).into());
        }
    }

    if let Some(d) = params.delta {
        args.push("-d".into());
        args.push(format_scientific(d).into());
    }
    if let Some(chi) = params.chi_air {
        args.push(format!("--chi0={}", format_scientific(chi)).into());
    }
    if params.compute_all_components {
        args.push("--xyz".into());
    }
    if let Some(ext) = params.extend_boundary {
        args.push(format!("--extendboundary={}", format_fixed(ext, 2)).into());
    }
    if params.direct_convolution {
        args.push("--directconv".into());
    }
    args
}

/// Render a full command line for display. Non-UTF-8 bytes are shown lossily.
pub fn join_cmdline<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(params: &B0CalcParams) -> Vec<OsString> {
        build_args(Path::new("in.nii"), Path::new("out.nii.gz"), params)
    }

    #[test]
    fn scientific_matches_c_printf() {
        assert_eq!(format_scientific(-9.45e-6), "-9.450000e-06");
        assert_eq!(format_scientific(4.0e-7), "4.000000e-07");
        assert_eq!(format_scientific(0.0), "0.000000e+00");
        assert_eq!(format_scientific(1.5e123), "1.500000e+123");
        assert_eq!(format_scientific(12345.0), "1.234500e+04");
        assert_eq!(format_scientific(f64::NAN), "nan");
        assert_eq!(format_scientific(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn fixed_uses_requested_precision() {
        assert_eq!(format_fixed(1.5, 4), "1.5000");
        assert_eq!(format_fixed(3.0, 2), "3.00");
        assert_eq!(format_fixed(-0.004, 4), "-0.0040");
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn defaults_render_only_input_and_output() {
        assert_eq!(args_for(&B0CalcParams::default()), ["-i", "in.nii", "-o", "out.nii.gz"]);
    }

    #[test]
    fn every_field_renders_in_fixed_order() {
        let params = B0CalcParams {
            gradient_x: Some(1.5),
            gradient_y: Some(-0.25),
            gradient_z: Some(0.0),
            b0_x: Some(0.1),
            b0_y: Some(0.2),
            b0_z: Some(3.0),
            delta: Some(-9.45e-6),
            chi_air: Some(4.0e-7),
            compute_all_components: true,
            extend_boundary: Some(1.25),
            direct_convolution: true,
            ..B0CalcParams::default()
        };
        assert_eq!(
            args_for(&params),
            [
                "-i",
                "in.nii",
                "-o",
                "out.nii.gz",
                "--gx=1.5000",
                "--gy=-0.2500",
                "--gz=0.0000",
                "--b0x=0.10",
                "--b0y=0.20",
                "--b0=3.00",
                "-d",
                "-9.450000e-06",
                "--chi0=4.000000e-07",
                "--xyz",
                "--extendboundary=1.25",
                "--directconv",
            ]
        );
    }

    #[test]
    fn booleans_are_bare_or_absent() {
        let params = B0CalcParams {
            compute_all_components: true,
            direct_convolution: false,
            ..B0CalcParams::default()
        };
        let args = args_for(&params);
        assert!(args.iter().any(|a| a == "--xyz"));
        assert!(!args.iter().any(|a| a.to_string_lossy().starts_with("--directconv")));
        assert!(!args.iter().any(|a| a.to_string_lossy().starts_with("--xyz=")));
    }

    #[test]
    fn building_is_deterministic() {
        let params = B0CalcParams {
            gradient_z: Some(0.123456),
            chi_air: Some(3.3e-7),
            ..B0CalcParams::default()
        };
        assert_eq!(args_for(&params), args_for(&params));
    }

    #[test]
    fn cmdline_joins_with_spaces() {
        let args = vec!["-i".to_string(), "a.nii".to_string()];
        assert_eq!(join_cmdline("b0calc", &args), "b0calc -i a.nii");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_pass_through_untouched() {
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"seg\xff.nii"));
        let output = Path::new(OsStr::from_bytes(b"seg\xff_b0field.nii.gz"));
        let args = build_args(input, output, &B0CalcParams::default());
        assert_eq!(args[1].as_bytes(), b"seg\xff.nii");
        assert_eq!(args[3].as_bytes(), b"seg\xff_b0field.nii.gz");
    }
}
