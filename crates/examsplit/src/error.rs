//! Error type for the extraction pipeline.

use std::path::PathBuf;

/// Errors surfaced by document loading, rendering, and output writing.
///
/// Segmentation itself cannot fail: a page that yields nothing yields an
/// empty region list, not an error.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The pdfium backend rejected the document or a page operation.
    /// pdfium's own error values are stringified at the boundary.
    #[error("pdfium: {0}")]
    Pdfium(String),

    /// The input path does not exist or is not a file.
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    /// Encoding or saving a cropped image failed.
    #[error("image: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure while creating output directories or files.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Answer-key JSON could not be written or parsed.
    #[error("answer key: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
