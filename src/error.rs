use std::path::PathBuf;

use thiserror::Error;

/// Result type for CV conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures surfaced to the caller.
///
/// Per-file conversion problems (unreadable input, malformed YAML) are not
/// represented here: converters log them and return `Ok(None)` so the caller
/// can skip that input and continue with the rest.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// LaTeX engine binary is not installed or not on PATH
    #[error("{0} is not installed or not on PATH (install TeX Live: https://www.tug.org/texlive/)")]
    EngineMissing(String),

    /// LaTeX engine ran but reported failure
    #[error("{engine} failed with {status}:\n{log}")]
    Compile {
        engine: String,
        status: std::process::ExitStatus,
        log: String,
    },

    /// Engine exited cleanly but the PDF never appeared
    #[error("no PDF was produced at {}", .0.display())]
    MissingPdf(PathBuf),
}
