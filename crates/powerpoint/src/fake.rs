//! In-memory stand-in for PowerPoint that records every automation call.

use crate::automation::{Application, Document, Launcher};
use pptshot_core::{AppInfo, Error, OpenFlags, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// An automation call observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Launch,
    Info,
    Open { path: PathBuf, flags: OpenFlags },
    SlideMasterSize,
    SlideCount,
    Export {
        index: u32,
        path: PathBuf,
        filter: String,
        width: u32,
        height: u32,
    },
    MarkUnmodified,
    Close,
    Quit,
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    slides: u32,
    size: (f64, f64),
    fail_launch: bool,
    fail_open: bool,
    fail_info: bool,
    fail_export: bool,
}

/// A fake PowerPoint installation. Clones share the same call log.
#[derive(Debug, Clone, Default)]
pub struct FakePowerPoint {
    state: Rc<RefCell<State>>,
}

impl FakePowerPoint {
    /// A presentation with `slides` slides and a native size of
    /// `width` x `height` points.
    pub fn new(slides: u32, width: f64, height: f64) -> Self {
        let state = State {
            slides,
            size: (width, height),
            ..State::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Make every launch fail as if PowerPoint were not installed.
    pub fn failing_launch(self) -> Self {
        self.state.borrow_mut().fail_launch = true;
        self
    }

    /// Make `Presentations.Open` fail.
    pub fn failing_open(self) -> Self {
        self.state.borrow_mut().fail_open = true;
        self
    }

    /// Make reading `Version`, `Build` and `OperatingSystem` fail.
    pub fn failing_info(self) -> Self {
        self.state.borrow_mut().fail_info = true;
        self
    }

    /// Make `Slide.Export` fail.
    pub fn failing_export(self) -> Self {
        self.state.borrow_mut().fail_export = true;
        self
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Number of application instances launched.
    pub fn launches(&self) -> usize {
        self.count(|c| matches!(c, Call::Launch))
    }

    /// Number of application instances quit.
    pub fn quits(&self) -> usize {
        self.count(|c| matches!(c, Call::Quit))
    }

    /// The export calls recorded so far.
    pub fn exports(&self) -> Vec<Call> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Export { .. }))
            .cloned()
            .collect()
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl Launcher for FakePowerPoint {
    type App = FakeApplication;

    fn launch(&self) -> Result<FakeApplication> {
        if self.state.borrow().fail_launch {
            return Err(Error::Unavailable("class not registered".into()));
        }
        self.record(Call::Launch);
        Ok(FakeApplication { fake: self.clone() })
    }
}

/// Application handle handed out by [`FakePowerPoint`].
#[derive(Debug)]
pub struct FakeApplication {
    fake: FakePowerPoint,
}

impl Application for FakeApplication {
    type Doc = FakeDocument;

    fn info(&self) -> Result<AppInfo> {
        self.fake.record(Call::Info);
        if self.fake.state.borrow().fail_info {
            return Err(Error::Property {
                name: "Version",
                reason: "member not found".into(),
            });
        }
        Ok(AppInfo {
            version: "16.0".into(),
            build: "0".into(),
            operating_system: "Fake".into(),
        })
    }

    fn open(&self, path: &Path, flags: OpenFlags) -> Result<FakeDocument> {
        self.fake.record(Call::Open {
            path: path.to_path_buf(),
            flags,
        });
        if self.fake.state.borrow().fail_open {
            return Err(Error::Open {
                path: path.to_path_buf(),
                reason: "file is corrupt".into(),
            });
        }
        Ok(FakeDocument {
            fake: self.fake.clone(),
        })
    }

    fn quit(&mut self) -> Result<()> {
        self.fake.record(Call::Quit);
        Ok(())
    }
}

/// Document handle handed out by [`FakeApplication`].
#[derive(Debug)]
pub struct FakeDocument {
    fake: FakePowerPoint,
}

impl Document for FakeDocument {
    fn slide_master_size(&self) -> Result<(f64, f64)> {
        self.fake.record(Call::SlideMasterSize);
        Ok(self.fake.state.borrow().size)
    }

    fn slide_count(&self) -> Result<u32> {
        self.fake.record(Call::SlideCount);
        Ok(self.fake.state.borrow().slides)
    }

    fn export_slide(
        &self,
        index: u32,
        path: &Path,
        filter: &str,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.fake.record(Call::Export {
            index,
            path: path.to_path_buf(),
            filter: filter.to_string(),
            width,
            height,
        });
        if self.fake.state.borrow().fail_export {
            return Err(Error::Export {
                index,
                path: path.to_path_buf(),
                reason: "access denied".into(),
            });
        }
        Ok(())
    }

    fn mark_unmodified(&mut self) -> Result<()> {
        self.fake.record(Call::MarkUnmodified);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.fake.record(Call::Close);
        Ok(())
    }
}
