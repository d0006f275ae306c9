/// Fixed resize parameters for the website cursors
///
/// Nothing here is read from the environment or the command line;
/// the values are compiled in.

use image::imageops::FilterType;

/// Cursor images rewritten by the binary, processed in this order
pub const CURSOR_FILES: [&str; 2] = ["website/cursor-auto.png", "website/cursor-pointer.png"];

/// Largest side of a cursor image in pixels
pub const CURSOR_SIZE: u32 = 32;

/// Bounding box and filter used when shrinking an image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSettings {
    /// Maximum output width in pixels
    pub max_width: u32,
    /// Maximum output height in pixels
    pub max_height: u32,
    /// Resampling filter
    /// - Lanczos3 keeps gradients smooth at a 5x reduction
    /// - Nearest would keep hard pixel-art edges but aliases badly
    pub filter: FilterType,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            max_width: CURSOR_SIZE,
            max_height: CURSOR_SIZE,
            filter: FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cursor_box() {
        let settings = ResizeSettings::default();
        assert_eq!(settings.max_width, 32);
        assert_eq!(settings.max_height, 32);
        assert_eq!(settings.filter, FilterType::Lanczos3);
    }

    #[test]
    fn test_worklist_order() {
        assert_eq!(CURSOR_FILES[0], "website/cursor-auto.png");
        assert_eq!(CURSOR_FILES[1], "website/cursor-pointer.png");
    }
}
