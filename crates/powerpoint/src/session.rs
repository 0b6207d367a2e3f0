//! Scoped ownership of an application instance and an open presentation.

use crate::automation::{Application, Document, Launcher};
use pptshot_core::{OpenFlags, Result};
use std::ops::Deref;
use std::path::Path;

/// One application instance, quit when dropped.
pub struct Session<A: Application> {
    app: A,
}

impl<A: Application> Session<A> {
    /// Launch a new instance.
    pub fn start<L>(launcher: &L) -> Result<Self>
    where
        L: Launcher<App = A>,
    {
        let app = launcher.launch()?;
        log::debug!("PowerPoint session started");
        Ok(Self { app })
    }

    /// Open a presentation read-only without a window.
    ///
    /// The returned guard borrows the session, so the document is always
    /// closed before the application quits.
    pub fn open(&self, path: &Path) -> Result<OpenDocument<'_, A::Doc>> {
        let doc = self.app.open(path, OpenFlags::VIEW_ONLY)?;
        log::debug!("Opened {}", path.display());
        Ok(OpenDocument {
            doc,
            _session: std::marker::PhantomData,
        })
    }
}

impl<A: Application> Deref for Session<A> {
    type Target = A;

    fn deref(&self) -> &A {
        &self.app
    }
}

impl<A: Application> Drop for Session<A> {
    fn drop(&mut self) {
        if let Err(e) = self.app.quit() {
            log::warn!("Failed to quit PowerPoint: {}", e);
        }
        log::debug!("PowerPoint session ended");
    }
}

/// An open presentation, marked unmodified and closed when dropped.
pub struct OpenDocument<'s, D: Document> {
    doc: D,
    _session: std::marker::PhantomData<&'s ()>,
}

impl<D: Document> Deref for OpenDocument<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> Drop for OpenDocument<'_, D> {
    fn drop(&mut self) {
        if let Err(e) = self.doc.mark_unmodified() {
            log::warn!("Failed to mark presentation as saved: {}", e);
        }
        if let Err(e) = self.doc.close() {
            log::warn!("Failed to close presentation: {}", e);
        }
    }
}
