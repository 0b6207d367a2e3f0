//! Error types for slide rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating a request or driving PowerPoint.
#[derive(Error, Debug)]
pub enum Error {
    /// The input presentation does not exist.
    #[error("the input presentation does not exist: {}", .0.display())]
    InputMissing(PathBuf),

    /// The output image already exists and overwriting was not requested.
    #[error("the output image file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// A path could not be made absolute.
    #[error("failed to get absolute path for {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PowerPoint application could not be launched or reached.
    #[error("PowerPoint application is unavailable: {0}")]
    Unavailable(String),

    /// COM automation is not available on this platform.
    #[error("PowerPoint automation is not supported on this platform")]
    Unsupported,

    /// The presentation could not be opened.
    #[error("failed to open presentation {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    /// Reading or writing an automation property failed.
    #[error("failed to access property {name}: {reason}")]
    Property { name: &'static str, reason: String },

    /// Calling an automation method failed.
    #[error("failed to call method {name}: {reason}")]
    Call { name: &'static str, reason: String },

    /// The presentation has no slides to export.
    #[error("the presentation contains no slides")]
    NoSlides,

    /// The slide export call failed.
    #[error("failed to export slide {index} to {}: {reason}", path.display())]
    Export {
        index: u32,
        path: PathBuf,
        reason: String,
    },
}
