//! The primitive image type widgets display and skins composite into.

use crate::error::AssetError;
use crate::geometry::Size;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// An RGBA8 pixel buffer.
///
/// A zero-sized pixmap is the placeholder installed when an asset fails to
/// load; widgets treat it as "no image for this state".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    pixels: RgbaImage,
}

impl Default for Pixmap {
    fn default() -> Self {
        Self::empty()
    }
}

impl Pixmap {
    /// Create a blank (fully transparent) canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// The zero-sized placeholder.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Build a pixmap by evaluating `f` at every pixel.
    #[must_use]
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        Self {
            pixels: RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y))),
        }
    }

    /// Wrap an already decoded image.
    #[must_use]
    pub const fn from_image(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Load and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            pixels: decoded.into_rgba8(),
        })
    }

    /// Load an image file, substituting the empty placeholder on failure.
    ///
    /// Failure is reported with `log::warn!` and never aborts the caller.
    #[must_use]
    pub fn open_or_placeholder(path: impl AsRef<Path>) -> Self {
        match Self::open(path) {
            Ok(pixmap) => pixmap,
            Err(err) => {
                log::warn!("{err}");
                Self::empty()
            }
        }
    }

    /// Encode to a file; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let path = path.as_ref();
        self.pixels.save(path).map_err(|source| AssetError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size as layout units.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// True for the zero-sized placeholder (or any degenerate image).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Read one pixel; `None` outside the image.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Write one pixel. Writes outside the image are clipped away.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(p) = self.pixels.get_pixel_mut_checked(x, y) {
            *p = Rgba(rgba);
        }
    }

    /// Borrow the underlying buffer.
    #[must_use]
    pub const fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let p = Pixmap::new(3, 2);
        assert_eq!(p.width(), 3);
        assert_eq!(p.height(), 2);
        assert_eq!(p.get_pixel(2, 1), Some([0, 0, 0, 0]));
        assert!(!p.is_empty());
    }

    #[test]
    fn test_empty_placeholder() {
        let p = Pixmap::empty();
        assert!(p.is_empty());
        assert_eq!(p.get_pixel(0, 0), None);
        assert_eq!(p.size(), Size::ZERO);
    }

    #[test]
    fn test_put_pixel_clips_out_of_bounds() {
        let mut p = Pixmap::new(2, 2);
        p.put_pixel(1, 1, [9, 8, 7, 255]);
        p.put_pixel(5, 5, [1, 1, 1, 255]);
        assert_eq!(p.get_pixel(1, 1), Some([9, 8, 7, 255]));
    }

    #[test]
    fn test_from_fn() {
        let p = Pixmap::from_fn(4, 4, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(p.get_pixel(3, 1), Some([3, 1, 0, 255]));
    }

    #[test]
    fn test_open_missing_file_is_error() {
        let err = Pixmap::open("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, AssetError::Load { .. }));
    }

    #[test]
    fn test_open_or_placeholder_degrades() {
        let p = Pixmap::open_or_placeholder("/definitely/not/here.png");
        assert!(p.is_empty());
    }

    #[test]
    fn test_save_then_open() {
        let path = std::env::temp_dir().join(format!(
            "skinscroll-pixmap-{}.png",
            std::process::id()
        ));
        let src = Pixmap::from_fn(5, 3, |x, y| [x as u8 * 10, y as u8 * 20, 7, 255]);
        src.save(&path).unwrap();

        let loaded = Pixmap::open(&path).unwrap();
        assert_eq!(loaded, src);
        let _ = std::fs::remove_file(&path);
    }
}
