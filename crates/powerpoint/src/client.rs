//! High-level operations, each running in its own PowerPoint session.

use crate::automation::{Application, Document, Launcher};
use crate::session::Session;
use pptshot_core::{clamp_slide_index, format_token, Error, Rect, Result};
use std::path::Path;

/// Drives PowerPoint through a [`Launcher`].
///
/// Every operation launches a fresh instance and quits it before returning,
/// on success and on failure alike. Nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct AutomationClient<L> {
    launcher: L,
}

impl<L: Launcher> AutomationClient<L> {
    /// Create a client around the given launcher.
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Check that PowerPoint can be started.
    pub fn is_available(&self) -> bool {
        let session = match Session::start(&self.launcher) {
            Ok(session) => session,
            Err(e) => {
                log::debug!("PowerPoint is not available: {}", e);
                return false;
            }
        };

        match session.info() {
            Ok(info) => log::debug!("{}", info),
            Err(e) => log::debug!("Could not read PowerPoint version: {}", e),
        }
        true
    }

    /// Native slide size of a presentation, anchored at the origin.
    pub fn display_bounds(&self, input: &Path) -> Result<Rect> {
        let session = Session::start(&self.launcher)?;
        let doc = session.open(input)?;

        let (width, height) = doc.slide_master_size()?;
        log::debug!("Slide master is {}x{}", width, height);

        // Points are truncated to whole pixels.
        Ok(Rect::from_size(width as u32, height as u32))
    }

    /// Export one slide of `input` to `output` at `width` x `height`.
    ///
    /// `index` is 1-based and clamped into the presentation's slide range.
    /// The graphics filter comes from the output extension. Returns the
    /// slide number that was actually exported.
    pub fn export(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
        index: i32,
    ) -> Result<u32> {
        let session = Session::start(&self.launcher)?;
        let doc = session.open(input)?;

        let count = doc.slide_count()?;
        let slide = clamp_slide_index(index, count).ok_or(Error::NoSlides)?;
        if i64::from(slide) != i64::from(index) {
            log::debug!("Slide {} out of range 1..={}, using {}", index, count, slide);
        }

        let filter = format_token(output);
        log::debug!(
            "Exporting slide {} as {} at {}x{} to {}",
            slide,
            filter,
            width,
            height,
            output.display()
        );
        doc.export_slide(slide, output, &filter, width, height)?;

        Ok(slide)
    }
}
