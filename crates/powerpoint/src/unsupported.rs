//! Backend for platforms without COM. PowerPoint is never available.

use crate::automation::{Application, Document, Launcher};
use pptshot_core::{AppInfo, Error, OpenFlags, Result};
use std::path::Path;

/// Launcher that always fails with [`Error::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPoint;

impl Launcher for PowerPoint {
    type App = NoApplication;

    fn launch(&self) -> Result<NoApplication> {
        Err(Error::Unsupported)
    }
}

/// Uninhabited: no instance can ever be launched.
#[derive(Debug)]
pub enum NoApplication {}

impl Application for NoApplication {
    type Doc = NoDocument;

    fn info(&self) -> Result<AppInfo> {
        match *self {}
    }

    fn open(&self, _path: &Path, _flags: OpenFlags) -> Result<NoDocument> {
        match *self {}
    }

    fn quit(&mut self) -> Result<()> {
        match *self {}
    }
}

/// Uninhabited: no presentation can ever be opened.
#[derive(Debug)]
pub enum NoDocument {}

impl Document for NoDocument {
    fn slide_master_size(&self) -> Result<(f64, f64)> {
        match *self {}
    }

    fn slide_count(&self) -> Result<u32> {
        match *self {}
    }

    fn export_slide(&self, _: u32, _: &Path, _: &str, _: u32, _: u32) -> Result<()> {
        match *self {}
    }

    fn mark_unmodified(&mut self) -> Result<()> {
        match *self {}
    }

    fn close(&mut self) -> Result<()> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AutomationClient;

    #[test]
    fn test_never_available() {
        let client = AutomationClient::new(PowerPoint);
        assert!(!client.is_available());
        assert!(matches!(
            client.display_bounds(Path::new("deck.pptx")),
            Err(Error::Unsupported)
        ));
    }
}
