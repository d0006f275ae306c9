/// Cursor image resizing module
///
/// This module handles:
/// - Decoding cursor images and detecting their format
/// - Shrink-to-fit dimension calculation
/// - Resampling and overwriting files in place
/// - Per-file reporting over a worklist

pub mod asset;
pub mod error;
pub mod settings;
pub mod thumbnail;
