use std::fmt;
use std::path::{Path, PathBuf};

use super::asset::ImageAsset;
use super::error::ResizeError;
use super::settings::ResizeSettings;

/// Outcome of resizing one file from the worklist
#[derive(Debug)]
pub struct ResizeReport {
    pub path: PathBuf,
    /// Final (width, height) on success
    pub outcome: Result<(u32, u32), ResizeError>,
}

impl ResizeReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for ResizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok((width, height)) => {
                write!(f, "Resized {} to ({}, {})", self.path.display(), width, height)
            }
            Err(e) => write!(f, "Error resizing {}: {}", self.path.display(), e),
        }
    }
}

/// Dimensions that fit `width` x `height` inside the bounding box
///
/// Both sides are scaled by the same factor so the constraining side hits
/// the box exactly. Images already inside the box come back unchanged.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let ratio = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let scale = |side: u32, max: u32| ((side as f64 * ratio).round() as u32).max(1).min(max);

    (scale(width, max_width), scale(height, max_height))
}

/// Decode, shrink and overwrite a single file
///
/// Returns the dimensions that were written.
pub fn resize_in_place(path: &Path, settings: &ResizeSettings) -> Result<(u32, u32), ResizeError> {
    let mut asset = ImageAsset::open(path)?;
    asset.shrink_to_fit(settings.max_width, settings.max_height, settings.filter);
    asset.save()?;
    Ok(asset.dimensions())
}

/// Resize every path in order
///
/// A failure on one path never stops the rest of the list.
pub fn resize_all<P: AsRef<Path>>(paths: &[P], settings: &ResizeSettings) -> Vec<ResizeReport> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let outcome = resize_in_place(path, settings);

            if let Err(e) = &outcome {
                log::warn!("⚠️  {} left untouched: {:?}", path.display(), e);
            }

            ResizeReport {
                path: path.to_path_buf(),
                outcome,
            }
        })
        .collect()
}
