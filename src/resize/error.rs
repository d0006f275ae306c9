use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong while resizing a single file.
///
/// Decode, resample and encode failures all land here; the worklist
/// reports them per file and moves on.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("cannot determine image format of {}", .0.display())]
    UnknownFormat(PathBuf),
}
