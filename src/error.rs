use std::path::PathBuf;

use thiserror::Error;

/// Result type for series loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors produced while loading a DICOM series from disk.
///
/// Individual unreadable files inside a folder are not errors; they are
/// skipped by the loader. These variants cover the cases where the whole
/// series is unusable.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The series directory does not exist or is not a directory.
    #[error("series folder not found: {0}")]
    FolderNotFound(PathBuf),

    /// Directory enumeration failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A DICOM file could not be read or its pixel data decoded.
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// Every file in the folder failed to read as a DICOM slice.
    #[error("no readable DICOM slices in {0}")]
    NoReadableSlices(PathBuf),
}

// Convert dicom-rs errors
impl From<dicom_object::ReadError> for LoadError {
    fn from(e: dicom_object::ReadError) -> Self {
        LoadError::Dicom(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for LoadError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        LoadError::Dicom(format!("{}", e))
    }
}
