use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors, each one terminates the run with its own exit code
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Input file does not exist or is not a regular file
    #[error("file '{}' not found, pass the path with --apk", .0.display())]
    NotFound(PathBuf),

    /// Package parser refused the file
    #[error("can't parse apk {}: {}", .path.display(), .reason)]
    Parse { path: PathBuf, reason: String },
}

impl SummaryError {
    /// Process exit code reserved for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SummaryError::NotFound(_) => 1,
            SummaryError::Parse { .. } => 2,
        }
    }
}

/// Recoverable errors of the icon stage, never leave [`crate::icon`]
#[derive(Error, Debug)]
pub enum IconError {
    /// Manifest does not reference an icon
    #[error("icon is not declared in the apk")]
    MissingIconPath,

    /// Icon entry can't be read from the archive or is empty
    #[error("can't read icon file {0:?} from apk")]
    UnreadableIcon(String),

    /// Image decoder or encoder rejected the icon
    #[error("can't transcode icon: {0}")]
    Decode(#[from] image::ImageError),

    /// Raw icon bytes can't be written to disk
    #[error("can't save icon: {0}")]
    Write(#[from] io::Error),
}
