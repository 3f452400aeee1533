//! Finding SEG-Y files to scan.

use crate::error::{Result, SegyScanError};
use crate::segy::FIRST_TRACE_OFFSET;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted when scanning a directory (case-insensitive).
pub const SEGY_EXTENSIONS: [&str; 2] = ["sgy", "segy"];

/// Name of the output directory created next to the input.
pub const OUTPUT_DIR_NAME: &str = "segyscan";

/// Collect the SEG-Y files named by `input`.
///
/// A file is taken as-is if it is large enough to hold at least one trace
/// header. A directory is listed (not recursively) and filtered by extension
/// and size. Results are sorted by path.
pub fn discover(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if input.is_file() {
        if is_valid_size(input) {
            files.push(input.to_path_buf());
        }
    } else if input.is_dir() {
        for entry in fs::read_dir(input)?.flatten() {
            let path = entry.path();
            if path.is_file() && has_segy_extension(&path) && is_valid_size(&path) {
                files.push(path);
            }
        }
        files.sort();
    } else {
        return Err(SegyScanError::PathNotFound {
            path: input.to_path_buf(),
        });
    }

    tracing::debug!(input = %input.display(), found = files.len(), "Discovered SEG-Y files");
    Ok(files)
}

/// Whether the path ends in `.sgy` or `.segy`, any case.
pub fn has_segy_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SEGY_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Whether the file is larger than the textual plus binary headers.
pub fn is_valid_size(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.len() > FIRST_TRACE_OFFSET)
        .unwrap_or(false)
}

/// Report label of a file: its name without extension.
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// File name with extension.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Default output directory: `segyscan` inside a directory input, or next to
/// a file input.
pub fn default_output_dir(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join(OUTPUT_DIR_NAME)
    } else {
        input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OUTPUT_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(&vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn filters_directory_by_extension_and_size() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.sgy", 4000);
        touch(dir.path(), "a.SEGY", 3601);
        touch(dir.path(), "small.sgy", 3600);
        touch(dir.path(), "notes.txt", 5000);
        fs::create_dir(dir.path().join("sub.sgy")).unwrap();

        let found = discover(dir.path()).unwrap();
        let names: Vec<String> = found.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.SEGY", "b.sgy"]);
    }

    #[test]
    fn single_file_skips_extension_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(dir.path(), "shot.dat", 4000);
        assert_eq!(discover(&path).unwrap(), vec![path]);

        let tiny = touch(dir.path(), "tiny.sgy", 10);
        assert!(discover(&tiny).unwrap().is_empty());
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = discover(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SegyScanError::PathNotFound { .. }));
    }

    #[test]
    fn labels_strip_the_extension() {
        let path = Path::new("/data/survey/line_07.sgy");
        assert_eq!(file_label(path), "line_07");
        assert_eq!(file_name(path), "line_07.sgy");
    }

    #[test]
    fn output_dir_sits_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(default_output_dir(dir.path()), dir.path().join("segyscan"));
        let file = touch(dir.path(), "x.sgy", 4000);
        assert_eq!(default_output_dir(&file), dir.path().join("segyscan"));
    }
}
