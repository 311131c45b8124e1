//! Image qualification by file extension.

use folio_core::FileNode;

/// Extensions recognized as images.
///
/// Matching is exact and case-sensitive: `photo.PNG` does not qualify.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpeg", "jpg", "gif", "png", "webp", "tiff", "tif"];

/// Decides whether a file counts as an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFilter;

impl ImageFilter {
    /// Create a new filter.
    pub fn new() -> Self {
        Self
    }

    /// Check if a file has an image extension.
    pub fn accepts(&self, file: &FileNode) -> bool {
        is_image_extension(&file.extension)
    }
}

/// Check an extension (without the dot) against [`IMAGE_EXTENSIONS`].
pub fn is_image_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension)
}
