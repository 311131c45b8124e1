//! JWalk-based snapshot of a directory as a vault.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace, warn};

use folio_core::{
    FileNode, FileStat, FolderNode, Node, ScanConfig, ScanError, SnapshotVault, path,
};

/// Reads a directory tree into an in-memory vault snapshot.
///
/// Paths in the snapshot are relative to the scanned root, which becomes the
/// vault root `/`. Children of each folder are ordered by file name.
#[derive(Debug, Default)]
pub struct DiskScanner;

impl DiskScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan `config.root` into a root folder node.
    pub fn scan(&self, config: &ScanConfig) -> Result<FolderNode, ScanError> {
        let root_path = self.resolve_root(config)?;
        self.scan_resolved(config, &root_path)
    }

    /// Scan `config.root` and wrap the result in a [`SnapshotVault`] whose
    /// resource URIs are `file://` URLs under the canonical root.
    pub fn scan_vault(&self, config: &ScanConfig) -> Result<SnapshotVault, ScanError> {
        let root_path = self.resolve_root(config)?;
        let root = self.scan_resolved(config, &root_path)?;
        Ok(SnapshotVault::new(root, file_uri_prefix(&root_path)))
    }

    fn resolve_root(&self, config: &ScanConfig) -> Result<PathBuf, ScanError> {
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }
        Ok(root_path)
    }

    fn scan_resolved(&self, config: &ScanConfig, root_path: &Path) -> Result<FolderNode, ScanError> {
        let start = Instant::now();
        let mut entries = self.collect_entries(config, root_path);
        let root = build_folder(root_path, path::ROOT_PATH, &mut entries);

        debug!(
            root = %root_path.display(),
            files = root.file_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(root)
    }

    /// Collect all entries using jwalk, keyed by parent directory.
    fn collect_entries(
        &self,
        config: &ScanConfig,
        root_path: &Path,
    ) -> HashMap<PathBuf, Vec<EntryInfo>> {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(root_path)
            .parallelism(parallelism)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .sort(true)
            .min_depth(1);

        let mut entries_by_parent: HashMap<PathBuf, Vec<EntryInfo>> = HashMap::new();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();

            let file_type = entry.file_type();
            let Some(parent) = path.parent() else {
                continue;
            };

            if file_type.is_dir() {
                entries_by_parent
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(EntryInfo {
                        name: file_name.into(),
                        path: path.clone(),
                        is_dir: true,
                        stat: FileStat::default(),
                    });
            } else if file_type.is_file() {
                let stat = match entry.metadata() {
                    Ok(metadata) => FileStat {
                        created: metadata.created().ok(),
                        modified: metadata.modified().ok(),
                        size: Some(metadata.len()),
                    },
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "metadata unavailable");
                        FileStat::default()
                    }
                };

                entries_by_parent
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(EntryInfo {
                        name: file_name.into(),
                        path: path.clone(),
                        is_dir: false,
                        stat,
                    });
            } else {
                trace!(path = %path.display(), "skipping non-regular entry");
            }
        }

        entries_by_parent
    }
}

/// Encoded `file://` URL of a directory, with a trailing `/`.
///
/// Windows verbatim prefixes (`\\?\`) left by `canonicalize` are dropped and
/// drive paths become `file:///C:/...`.
fn file_uri_prefix(dir: &Path) -> String {
    let lossy = dir.to_string_lossy();
    let plain = lossy.strip_prefix(r"\\?\").unwrap_or(&lossy);

    let mut uri = String::from("file://");
    for segment in plain.split(['/', '\\']).filter(|s| !s.is_empty()) {
        uri.push('/');
        uri.push_str(&path::encode_segment(segment));
    }
    uri.push('/');
    uri
}

/// Temporary struct for collecting entry information.
struct EntryInfo {
    name: CompactString,
    path: PathBuf,
    is_dir: bool,
    stat: FileStat,
}

/// Recursively build a folder node from collected entries.
fn build_folder(
    disk_path: &Path,
    vault_path: &str,
    entries_by_parent: &mut HashMap<PathBuf, Vec<EntryInfo>>,
) -> FolderNode {
    let mut folder = FolderNode::new(vault_path);
    let children = entries_by_parent.remove(disk_path).unwrap_or_default();

    for entry in children {
        let child_path = path::join(vault_path, &entry.name);
        if entry.is_dir {
            let child = build_folder(&entry.path, &child_path, entries_by_parent);
            folder.children.push(Node::Folder(child));
        } else {
            let child = FileNode::new(child_path).with_stat(entry.stat);
            folder.children.push(Node::File(child));
        }
    }

    folder
}
