pub mod alignment;
pub mod annotate;
pub mod render;

use std::path::Path;

use crate::source::{self, ReadError};

/// Compares two line sequences and renders every difference as a block.
///
/// Lines that only differ in the width of their whitespace runs are not
/// reported. Returns the empty string when nothing differs.
///
/// ```
/// use softdiff::diff_lines;
///
/// let output = diff_lines(&["Hello World"], &["Hello Universe"]);
/// assert!(output.contains("--World--"));
/// assert!(output.contains("++Universe++"));
///
/// assert_eq!(diff_lines(&["d. H"], &["d.  H"]), "");
/// ```
pub fn diff_lines<S: AsRef<str>>(lines_a: &[S], lines_b: &[S]) -> String {
    render::render(&alignment::align(lines_a, lines_b), lines_a, lines_b)
}

/// Compares two files on disk line by line.
///
/// ## Errors
///
/// Returns a [`ReadError`] when either file cannot be loaded; the
/// comparison itself cannot fail.
pub fn diff_files(path_a: &Path, path_b: &Path) -> Result<String, ReadError> {
    let lines_a = source::read_lines(path_a)?;
    let lines_b = source::read_lines(path_b)?;

    Ok(diff_lines(&lines_a, &lines_b))
}
