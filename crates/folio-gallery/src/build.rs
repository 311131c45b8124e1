//! End-to-end gallery construction.

use tracing::{debug, instrument};

use folio_core::{DisplayRecord, GalleryError, GallerySettings, Node, Vault};
use folio_scan::FileTreeWalker;

use crate::mapper::RecordMapper;
use crate::order::Sorter;

/// Build the ordered display records for the folder at `root_path`.
///
/// Resolution happens before anything else, so a bad path produces no
/// partial output.
///
/// # Errors
/// Returns [`GalleryError::PathResolution`] if `root_path` is missing from
/// the vault or names a file.
#[instrument(skip(vault, settings))]
pub fn build_gallery<V: Vault + ?Sized>(
    vault: &V,
    root_path: &str,
    settings: &GallerySettings,
) -> Result<Vec<DisplayRecord>, GalleryError> {
    let root = match vault.resolve(root_path) {
        Some(Node::Folder(folder)) => folder,
        _ => {
            return Err(GalleryError::PathResolution {
                path: root_path.to_string(),
            });
        }
    };

    let files = FileTreeWalker::new(settings).walk(root);
    let ordered = Sorter::from_settings(settings).order(files);
    let records = RecordMapper::new(vault).map(&ordered);

    debug!(records = records.len(), "gallery built");
    Ok(records)
}
