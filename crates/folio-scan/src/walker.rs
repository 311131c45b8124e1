//! Recursive collection of image files below a folder.

use tracing::{debug, trace};

use folio_core::{FileNode, FolderNode, GallerySettings, Node};

use crate::filter::ImageFilter;

/// Depth-first walker that gathers qualifying images in discovery order.
#[derive(Debug)]
pub struct FileTreeWalker<'s> {
    settings: &'s GallerySettings,
    filter: ImageFilter,
}

impl<'s> FileTreeWalker<'s> {
    /// Create a walker honoring `settings.recursive` and `settings.ignore`.
    pub fn new(settings: &'s GallerySettings) -> Self {
        Self {
            settings,
            filter: ImageFilter::new(),
        }
    }

    /// Collect images below `folder`.
    ///
    /// An ignored folder yields nothing, including its own files. Children are
    /// visited in the order the vault reports them; a subfolder's images are
    /// spliced in at the subfolder's position.
    pub fn walk<'v>(&self, folder: &'v FolderNode) -> Vec<&'v FileNode> {
        let mut images = Vec::new();
        self.walk_into(folder, &mut images);
        debug!(
            root = %folder.path,
            recursive = self.settings.recursive,
            found = images.len(),
            "walk complete"
        );
        images
    }

    fn walk_into<'v>(&self, folder: &'v FolderNode, images: &mut Vec<&'v FileNode>) {
        if self.settings.is_ignored(&folder.path) {
            trace!(folder = %folder.path, "skipping ignored folder");
            return;
        }

        for child in &folder.children {
            match child {
                Node::File(file) => {
                    if self.filter.accepts(file) {
                        images.push(file);
                    }
                }
                Node::Folder(sub) if self.settings.recursive => self.walk_into(sub, images),
                Node::Folder(sub) => {
                    trace!(folder = %sub.path, "not descending, recursion disabled");
                }
            }
        }
    }
}
