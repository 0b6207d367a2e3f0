//! Export request validation and sizing rules.

use crate::error::{Error, Result};
use crate::types::Rect;
use std::path::{Path, PathBuf};

/// Graphics filter used when the output has no usable extension.
pub const DEFAULT_FORMAT: &str = "PNG";

/// A validated request to render one slide to an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Absolute path of the presentation to read.
    pub input: PathBuf,

    /// Absolute path of the image to write.
    pub output: PathBuf,

    /// Requested width, `None` to use the slide's native width.
    pub width: Option<u32>,

    /// Requested height, `None` to use the slide's native height.
    pub height: Option<u32>,

    /// 1-based slide number. Clamped into range at export time.
    pub index: i32,
}

impl ExportRequest {
    /// Validate the raw paths and build a request.
    ///
    /// The input must be an existing file. The output must not exist unless
    /// `force` is set. Both paths are made absolute. A width or height of zero
    /// means "use the native size".
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        force: bool,
        width: u32,
        height: u32,
        index: i32,
    ) -> Result<Self> {
        let input = input.as_ref();
        if !input.is_file() {
            return Err(Error::InputMissing(input.to_path_buf()));
        }
        let input = absolute(input)?;

        let output = output.as_ref();
        if output.exists() && !force {
            return Err(Error::OutputExists(output.to_path_buf()));
        }
        let output = absolute(output)?;
        log::debug!("Resolved {} -> {}", input.display(), output.display());

        Ok(Self {
            input,
            output,
            width: (width != 0).then_some(width),
            height: (height != 0).then_some(height),
            index,
        })
    }

    /// Graphics filter name for the output path.
    pub fn format(&self) -> String {
        format_token(&self.output)
    }

    /// Output size: explicit overrides win, native bounds fill the rest.
    pub fn dimensions(&self, native: &Rect) -> (u32, u32) {
        (
            self.width.unwrap_or_else(|| native.width()),
            self.height.unwrap_or_else(|| native.height()),
        )
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path).map_err(|source| Error::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive the export filter name from a file extension.
///
/// `slide.jpg` gives `JPG`. A missing, empty or non UTF-8 extension gives
/// [`DEFAULT_FORMAT`].
pub fn format_token(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => ext.to_uppercase(),
        _ => DEFAULT_FORMAT.to_string(),
    }
}

/// Clamp a 1-based slide number into `[1, count]`.
///
/// Returns `None` when the presentation has no slides.
pub fn clamp_slide_index(index: i32, count: u32) -> Option<u32> {
    if count == 0 {
        return None;
    }
    let index = u32::try_from(index.max(1)).unwrap_or(1);
    Some(index.min(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_token() {
        assert_eq!(format_token(Path::new("out.png")), "PNG");
        assert_eq!(format_token(Path::new("out.jpg")), "JPG");
        assert_eq!(format_token(Path::new("/tmp/shots/slide.Tif")), "TIF");
        assert_eq!(format_token(Path::new("out")), "PNG");
        assert_eq!(format_token(Path::new("out.")), "PNG");
        assert_eq!(format_token(Path::new(".hidden")), "PNG");
    }

    #[test]
    fn test_clamp_slide_index() {
        assert_eq!(clamp_slide_index(2, 3), Some(2));
        assert_eq!(clamp_slide_index(10, 3), Some(3));
        assert_eq!(clamp_slide_index(0, 3), Some(1));
        assert_eq!(clamp_slide_index(-5, 3), Some(1));
        assert_eq!(clamp_slide_index(i32::MAX, 3), Some(3));
        assert_eq!(clamp_slide_index(1, 0), None);
    }

    #[test]
    fn test_dimensions() {
        let native = Rect::from_size(960, 540);
        let mut request = ExportRequest {
            input: PathBuf::from("/deck.pptx"),
            output: PathBuf::from("/out.png"),
            width: None,
            height: None,
            index: 1,
        };
        assert_eq!(request.dimensions(&native), (960, 540));

        request.width = Some(300);
        assert_eq!(request.dimensions(&native), (300, 540));

        request.width = None;
        request.height = Some(200);
        assert_eq!(request.dimensions(&native), (960, 200));

        request.width = Some(1920);
        request.height = Some(1080);
        assert_eq!(request.dimensions(&native), (1920, 1080));
    }

    #[test]
    fn test_new_resolves_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.pptx");
        fs::write(&input, b"pptx").unwrap();
        let output = dir.path().join("out.jpg");

        let request = ExportRequest::new(&input, &output, false, 300, 0, 10).unwrap();
        assert!(request.input.is_absolute());
        assert!(request.output.is_absolute());
        assert_eq!(request.width, Some(300));
        assert_eq!(request.height, None);
        assert_eq!(request.index, 10);
        assert_eq!(request.format(), "JPG");
    }

    #[test]
    fn test_new_rejects_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.pptx");
        let output = dir.path().join("out.png");

        let err = ExportRequest::new(&input, &output, false, 0, 0, 1).unwrap_err();
        assert!(matches!(err, Error::InputMissing(_)));
    }

    #[test]
    fn test_new_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.pptx");
        let output = dir.path().join("existing.png");
        fs::write(&input, b"pptx").unwrap();
        fs::write(&output, b"png").unwrap();

        let err = ExportRequest::new(&input, &output, false, 0, 0, 1).unwrap_err();
        assert!(matches!(err, Error::OutputExists(_)));

        let request = ExportRequest::new(&input, &output, true, 0, 0, 1).unwrap();
        assert_eq!(request.output, output);
    }
}
