/// A decoded image tied to the file it came from
///
/// The asset remembers its source path and detected format so it can be
/// written back over the original after resizing.

use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};
use std::path::{Path, PathBuf};

use super::error::ResizeError;
use super::thumbnail::fit_within;

#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// File the image was decoded from and will be saved back to
    path: PathBuf,
    /// Encoding detected at load time
    format: ImageFormat,
    /// Decoded pixel data
    image: DynamicImage,
}

impl ImageAsset {
    /// Open and decode the file at `path`
    ///
    /// The format is sniffed from the file content; the extension is only
    /// used when the content is not recognised.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ResizeError> {
        let path = path.as_ref();

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| ResizeError::UnknownFormat(path.to_path_buf()))?;
        let image = reader.decode()?;

        log::debug!(
            "🖼️  Decoded {} ({:?}, {}x{})",
            path.display(),
            format,
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            format,
            image,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Shrink the image to fit `max_width` x `max_height`, keeping aspect ratio
    ///
    /// Images that already fit are left untouched; nothing is ever enlarged.
    pub fn shrink_to_fit(&mut self, max_width: u32, max_height: u32, filter: FilterType) {
        let (width, height) = self.dimensions();
        let (new_width, new_height) = fit_within(width, height, max_width, max_height);

        if (new_width, new_height) == (width, height) {
            log::info!("✅ {} already fits ({}x{})", self.path.display(), width, height);
            return;
        }

        log::info!(
            "📐 {}: {}x{} -> {}x{} ({:?})",
            self.path.display(),
            width,
            height,
            new_width,
            new_height,
            filter
        );
        self.image = self.image.resize_exact(new_width, new_height, filter);
    }

    /// Encode with the detected format and overwrite the source file
    pub fn save(&self) -> Result<(), ResizeError> {
        self.image.save_with_format(&self.path, self.format)?;
        Ok(())
    }
}
