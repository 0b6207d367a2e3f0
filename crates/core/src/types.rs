//! Domain types for a single slide export.

use serde::{Deserialize, Serialize};

/// Tri-state boolean used by Office automation for optional flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriState {
    True,
    False,
    /// Let the application pick its own default.
    UseDefault,
}

impl TriState {
    /// The integer PowerPoint expects on the wire (`msoTrue` is -1).
    pub fn as_i32(self) -> i32 {
        match self {
            Self::True => -1,
            Self::False => 0,
            Self::UseDefault => -2,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

/// Flags passed to `Presentations.Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFlags {
    pub read_only: TriState,
    pub untitled: TriState,
    pub with_window: TriState,
}

impl OpenFlags {
    /// Read-only, titled, windowless. Nothing is ever written back to the
    /// presentation and no window or alert is shown.
    pub const VIEW_ONLY: Self = Self {
        read_only: TriState::True,
        untitled: TriState::False,
        with_window: TriState::False,
    };
}

impl Default for OpenFlags {
    fn default() -> Self {
        Self::VIEW_ONLY
    }
}

/// An axis-aligned rectangle in the units PowerPoint reports (points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Build the rectangle `(x0, y0)-(x1, y1)`, swapping coordinates so that
    /// the result is always well formed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// A rectangle anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(0, 0, clamp(width), clamp(height))
    }

    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y0)
    }
}

/// Version metadata reported by the running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub version: String,
    pub build: String,
    pub operating_system: String,
}

impl std::fmt::Display for AppInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PowerPoint v{} build {} on {}",
            self.version, self.build, self.operating_system
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tri_state_wire_values() {
        assert_eq!(TriState::True.as_i32(), -1);
        assert_eq!(TriState::False.as_i32(), 0);
        assert_eq!(TriState::from(true), TriState::True);
        assert_eq!(TriState::from(false), TriState::False);
    }

    #[test]
    fn test_view_only_flags() {
        let flags = OpenFlags::default();
        assert_eq!(flags.read_only, TriState::True);
        assert_eq!(flags.untitled, TriState::False);
        assert_eq!(flags.with_window, TriState::False);
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::from_size(960, 540);
        assert_eq!(rect.x0, 0);
        assert_eq!(rect.y0, 0);
        assert_eq!(rect.width(), 960);
        assert_eq!(rect.height(), 540);

        let flipped = Rect::new(10, 20, 0, 0);
        assert_eq!(flipped, Rect::new(0, 0, 10, 20));
        assert_eq!(flipped.width(), 10);
    }

    #[test]
    fn test_app_info_display() {
        let info = AppInfo {
            version: "16.0".into(),
            build: "17231".into(),
            operating_system: "Windows (64-bit) NT 10.00".into(),
        };
        assert_eq!(
            info.to_string(),
            "PowerPoint v16.0 build 17231 on Windows (64-bit) NT 10.00"
        );
    }
}
