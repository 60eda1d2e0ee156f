//! Output path policy

use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf};

/// Marker inserted before the extension when not overwriting
pub const DEFAULT_MARKER: &str = "cut";

/// Whether `marker` can be spliced into a file name.
///
/// It must be non-empty and must not contain a path separator.
pub fn is_valid_marker(marker: &str) -> bool {
    !marker.is_empty() && !marker.chars().any(is_separator)
}

/// Derive the path a cut image is written to.
///
/// With `overwrite` the input path is returned as-is. Otherwise `.marker` is
/// inserted in front of the extension, which starts at the last `.` of the
/// file name: `a.png` becomes `a.cut.png`, `a.tar.gz` becomes
/// `a.tar.cut.gz` and `.hidden` becomes `.cut.hidden`. Names that are not
/// valid UTF-8 are kept byte for byte.
pub fn output_path(input: &Path, overwrite: bool, marker: &str) -> PathBuf {
    if overwrite {
        return input.to_path_buf();
    }

    let Some(name) = input.file_name() else {
        // no final component (`..`, `/`), append to the whole path
        let mut path = input.as_os_str().to_owned();
        path.push(".");
        path.push(marker);
        return PathBuf::from(path);
    };

    let mut file_name = OsString::new();
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => {
            file_name.push(stem);
            file_name.push(".");
            file_name.push(marker);
            file_name.push(".");
            file_name.push(ext);
        }
        // a leading dot is the only dot: all of it is extension
        _ if name.to_string_lossy().starts_with('.') => {
            file_name.push(".");
            file_name.push(marker);
            file_name.push(name);
        }
        _ => {
            file_name.push(name);
            file_name.push(".");
            file_name.push(marker);
        }
    }
    input.with_file_name(file_name)
}
