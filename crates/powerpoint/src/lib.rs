//! PowerPoint automation client for exporting slides as images.
//!
//! On Windows the [`PowerPoint`] launcher drives the installed application
//! over COM. Elsewhere it always reports the application as unavailable.

pub mod automation;
pub mod client;
pub mod session;

#[cfg(windows)]
mod com;
#[cfg(not(windows))]
mod unsupported;

#[cfg(any(test, feature = "fake"))]
pub mod fake;

pub use automation::{Application, Document, Launcher};
pub use client::AutomationClient;
pub use session::{OpenDocument, Session};

#[cfg(windows)]
pub use com::PowerPoint;
#[cfg(not(windows))]
pub use unsupported::PowerPoint;
