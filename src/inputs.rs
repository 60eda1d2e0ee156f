//! Expansion of input arguments into file paths

use std::path::{Path, PathBuf};

use glob::glob;

/// The argument as a glob pattern, if it is meant as one.
///
/// Existing paths are never patterns, even when their name holds `[` or `*`.
/// Names that are not valid UTF-8 cannot be patterns either.
fn as_pattern(arg: &Path) -> Option<&str> {
    if arg.exists() {
        return None;
    }
    arg.to_str().filter(|s| s.contains(['*', '?', '[']))
}

/// Turn command line arguments into the list of files to process.
///
/// Plain paths are passed through untouched so a missing file surfaces as
/// an open error later. Patterns expand to the files they match, in
/// alphabetical order, and must match at least one file.
pub fn expand(args: &[PathBuf]) -> Result<Vec<PathBuf>, InputError> {
    let mut files = Vec::new();

    for arg in args {
        let Some(pattern) = as_pattern(arg) else {
            files.push(arg.clone());
            continue;
        };

        let entries = glob(pattern).map_err(|e| InputError::Pattern(format!("{}: {}", pattern, e)))?;
        let before = files.len();
        for entry in entries {
            let path = entry.map_err(|e| InputError::Unreadable(e.to_string()))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(InputError::NoMatches(pattern.to_string()));
        }
        log::debug!("{} matched {} files", pattern, files.len() - before);
    }

    Ok(files)
}

#[derive(Debug)]
pub enum InputError {
    Pattern(String),
    NoMatches(String),
    Unreadable(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "Invalid pattern {}", e),
            Self::NoMatches(p) => write!(f, "No files match {}", p),
            Self::Unreadable(e) => write!(f, "Cannot read match: {}", e),
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_plain_paths_pass_through() {
        let args = vec![PathBuf::from("missing.png"), PathBuf::from("dir/b.png")];
        assert_eq!(expand(&args).unwrap(), args);
    }

    #[test]
    fn test_pattern_expands_sorted_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frame_0002.png"), b"").unwrap();
        fs::write(dir.path().join("frame_0001.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let files = expand(&[dir.path().join("*.png")]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("frame_0001.png"), dir.path().join("frame_0002.png")]
        );
    }

    #[test]
    fn test_existing_bracket_name_is_literal() {
        let dir = tempfile::tempdir().unwrap();
        let named = dir.path().join("sprite[1].png");
        fs::write(&named, b"").unwrap();
        fs::write(dir.path().join("sprite1.png"), b"").unwrap();

        assert_eq!(expand(&[named.clone()]).unwrap(), vec![named]);
    }

    #[test]
    fn test_existing_bracket_name_without_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let named = dir.path().join("sprite[1].png");
        fs::write(&named, b"").unwrap();

        assert_eq!(expand(&[named.clone()]).unwrap(), vec![named]);
    }

    #[test]
    fn test_pattern_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let result = expand(&[dir.path().join("*.png")]);
        assert!(matches!(result, Err(InputError::NoMatches(_))));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(expand(&[PathBuf::from("[")]), Err(InputError::Pattern(_))));
    }
}
