use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("invalid color format: {0:?} (expected RRGGBB or #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("cannot scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open image {}: {source}", .path.display())]
    AssetOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {}: {source}", .path.display())]
    AssetWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to extract frame from {}: {reason}", .path.display())]
    FrameExtraction { path: PathBuf, reason: String },

    #[error("error saving manifest {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrepError {
    /// Per-file derivation errors are recorded on the entry; everything else aborts a run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PrepError::AssetOpen { .. }
                | PrepError::AssetWrite { .. }
                | PrepError::FrameExtraction { .. }
        )
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PrepError>;
