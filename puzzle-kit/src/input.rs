//! Reading puzzle input files.

use std::fs;
use std::path::{Path, PathBuf};

/// Build the default input path for a puzzle: `<root>/<edition>/day-NN.txt`.
#[must_use]
pub fn default_input_path(root: &Path, edition: u16, day: u8) -> PathBuf {
    root.join(edition.to_string())
        .join(format!("day-{day:02}.txt"))
}

/// Read an input file to a string.
///
/// A file that can't be read is logged as an error and read as empty input instead. Puzzles reject
/// empty input while parsing, or produce an answer that fails verification.
#[must_use]
pub fn read_input(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
            text
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "could not read input file");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_pads_day() {
        let path = default_input_path(Path::new("inputs"), 2022, 5);
        assert_eq!(path, Path::new("inputs").join("2022").join("day-05.txt"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let text = read_input(Path::new("this/path/does/not/exist.txt"));
        assert!(text.is_empty());
    }
}
