//! The slice of the PowerPoint object model this crate depends on.
//!
//! Backends implement these traits; [`crate::session`] wraps them in guards
//! that always close the document and quit the application.

use pptshot_core::{AppInfo, OpenFlags, Result};
use std::path::Path;

/// Starts a fresh application instance.
pub trait Launcher {
    type App: Application;

    /// Launch (or connect to) the application.
    fn launch(&self) -> Result<Self::App>;
}

/// A running application instance. Dropping it releases the connection.
pub trait Application {
    type Doc: Document;

    /// Version, build and operating system reported by the application.
    fn info(&self) -> Result<AppInfo>;

    /// `Presentations.Open(path, ReadOnly, Untitled, WithWindow)`.
    fn open(&self, path: &Path, flags: OpenFlags) -> Result<Self::Doc>;

    /// `Application.Quit`.
    fn quit(&mut self) -> Result<()>;
}

/// An open presentation. Dropping it releases the handle.
pub trait Document {
    /// `SlideMaster.Width` and `SlideMaster.Height`, in points.
    fn slide_master_size(&self) -> Result<(f64, f64)>;

    /// `Slides.Count`.
    fn slide_count(&self) -> Result<u32>;

    /// `Slides.Item(index).Export(path, filter, width, height)`.
    fn export_slide(
        &self,
        index: u32,
        path: &Path,
        filter: &str,
        width: u32,
        height: u32,
    ) -> Result<()>;

    /// Set `Saved` so closing never prompts.
    fn mark_unmodified(&mut self) -> Result<()>;

    /// `Presentation.Close`.
    fn close(&mut self) -> Result<()>;
}
