//! Output file naming: split image file names into stem and extension, and derive
//! the default `<stem>_b0field<ext>` output name.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::types::OutputType;

pub const OUTPUT_SUFFIX: &str = "_b0field";

/// Multi-part extensions that must be kept whole when splitting a file name.
const COMPOUND_EXTENSIONS: [&str; 3] = [".nii.gz", ".tar.gz", ".niml.dset"];

/// Split `path` into (parent directory, stem, extension).
///
/// Compound extensions are matched case-insensitively. The stem keeps the raw
/// OS bytes of the file name; the extension is for display only. Leading dots
/// never start an extension.
pub fn split_filename(path: &Path) -> (PathBuf, OsString, String) {
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let Some(name) = path.file_name() else {
        return (dir, OsString::new(), String::new());
    };
    let lossy = name.to_string_lossy();

    let compound = COMPOUND_EXTENSIONS.iter().find(|ext| {
        lossy.len() > ext.len()
            && lossy.is_char_boundary(lossy.len() - ext.len())
            && lossy[lossy.len() - ext.len()..].eq_ignore_ascii_case(ext)
    });
    let dots = compound.map_or(1, |ext| ext.matches('.').count());

    let mut stem: &OsStr = name;
    for _ in 0..dots {
        match Path::new(stem).file_stem() {
            Some(s) => stem = s,
            None => break,
        }
    }
    let stem_len = stem.to_string_lossy().len();
    let ext = lossy.get(stem_len..).unwrap_or_default().to_string();
    (dir, stem.to_os_string(), ext)
}

/// Default output file name for `input`: `<stem>_b0field` plus the extension of
/// `output_type`. The result carries no directory.
pub fn derive_output_name(input: &Path, output_type: OutputType) -> PathBuf {
    let (_, mut name, _) = split_filename(input);
    name.push(OUTPUT_SUFFIX);
    name.push(output_type.extension());
    PathBuf::from(name)
}

/// The explicit output if given, else the derived default.
pub fn resolve_output_path(
    input: &Path,
    provided: Option<&Path>,
    output_type: OutputType,
) -> PathBuf {
    match provided {
        Some(p) => p.to_path_buf(),
        None => derive_output_name(input, output_type),
    }
}
