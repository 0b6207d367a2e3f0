//! Core domain types, sizing rules and errors for rendering a PowerPoint
//! slide to an image.

pub mod error;
pub mod request;
pub mod types;

pub use error::{Error, Result};
pub use request::{clamp_slide_index, format_token, ExportRequest, DEFAULT_FORMAT};
pub use types::{AppInfo, OpenFlags, Rect, TriState};
