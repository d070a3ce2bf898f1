use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error raised while loading an input file.
///
/// One variant per cause so callers can react to each distinctly; a
/// comparison is a one-shot operation and nothing is retried.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a file and splits it into lines with terminators stripped.
///
/// Both `\n` and `\r\n` endings are recognized; a trailing terminator
/// does not produce an empty final line.
///
/// ## Errors
///
/// Returns the [`ReadError`] variant matching the failure cause.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let bytes = fs::read(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_owned(),
        },
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied {
            path: path.to_owned(),
        },
        _ => ReadError::Io {
            path: path.to_owned(),
            source: error,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8 {
        path: path.to_owned(),
    })?;

    Ok(text
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect())
}
