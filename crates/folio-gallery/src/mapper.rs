//! Conversion of ordered file nodes into display records.

use folio_core::{DisplayRecord, FileNode, Vault};

/// Maps file nodes to [`DisplayRecord`]s, resolving URIs through a vault.
pub struct RecordMapper<'a, V: Vault + ?Sized> {
    vault: &'a V,
}

impl<'a, V: Vault + ?Sized> RecordMapper<'a, V> {
    /// Create a mapper backed by `vault`.
    pub fn new(vault: &'a V) -> Self {
        Self { vault }
    }

    /// Map a single file.
    pub fn record(&self, file: &FileNode) -> DisplayRecord {
        DisplayRecord {
            name: file.name.clone(),
            folder: file.parent_path.clone(),
            uri: self.vault.resource_uri(&file.path),
        }
    }

    /// Map every file, preserving order.
    pub fn map(&self, files: &[&FileNode]) -> Vec<DisplayRecord> {
        files.iter().map(|file| self.record(file)).collect()
    }
}
