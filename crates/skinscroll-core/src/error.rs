//! Error types for skinscroll.

use crate::geometry::Size;
use std::path::PathBuf;
use thiserror::Error;

/// Degenerate widget geometry or tuning. Not recoverable by the widget; the
/// caller has to fix its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Trough has a zero or negative dimension.
    #[error("trough must be larger than zero on both axes, got {}x{}", .0.width, .0.height)]
    EmptyTrough(Size),

    /// Handle has a zero or negative dimension.
    #[error("handle must be larger than zero on both axes, got {}x{}", .0.width, .0.height)]
    EmptyHandle(Size),

    /// Handle does not fit inside its trough.
    #[error(
        "handle {}x{} does not fit trough {}x{}",
        handle.width, handle.height, trough.width, trough.height
    )]
    HandleExceedsTrough {
        /// Requested handle size
        handle: Size,
        /// Trough it has to fit in
        trough: Size,
    },

    /// Wheel step must be positive.
    #[error("wheel step must be positive, got {0}")]
    WheelStep(f32),

    /// Page percent must lie in (0, 1].
    #[error("page percent must be in (0, 1], got {0}")]
    PagePercent(f32),
}

/// An image asset could not be read or written.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Loading or decoding failed.
    #[error("image not loaded: {}: {source}", path.display())]
    Load {
        /// Path that was requested
        path: PathBuf,
        /// Decoder or IO failure
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing failed.
    #[error("image not saved: {}: {source}", path.display())]
    Save {
        /// Destination path
        path: PathBuf,
        /// Encoder or IO failure
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// Path the failed operation was about.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Load { path, .. } | Self::Save { path, .. } => path,
        }
    }
}
