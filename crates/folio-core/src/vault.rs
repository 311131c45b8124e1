//! The storage collaborator: path resolution and resource locators.

use crate::node::{FolderNode, Node};
use crate::path::{ROOT_PATH, encode_uri_path};

/// A read-only view of a vault.
///
/// Implementations own the node snapshot; callers only borrow it for the
/// duration of one gallery build.
pub trait Vault {
    /// Resolve a normalized vault path to a node.
    fn resolve(&self, path: &str) -> Option<&Node>;

    /// Produce a renderer-consumable locator for a file path.
    fn resource_uri(&self, path: &str) -> String;
}

/// In-memory vault over a fully built folder tree.
#[derive(Debug, Clone)]
pub struct SnapshotVault {
    /// Root node of the snapshot, stored as a node so it can be resolved.
    root: Node,

    /// Prepended to encoded file paths to form resource URIs. Must already
    /// be a valid URI prefix.
    uri_prefix: String,
}

impl SnapshotVault {
    /// Create a vault from a root folder and a URI prefix.
    pub fn new(root: FolderNode, uri_prefix: impl Into<String>) -> Self {
        Self {
            root: Node::Folder(root),
            uri_prefix: uri_prefix.into(),
        }
    }

    /// Root folder of the snapshot.
    pub fn root(&self) -> &FolderNode {
        match &self.root {
            Node::Folder(folder) => folder,
            Node::File(_) => unreachable!("snapshot root is always a folder"),
        }
    }

    /// Prefix used for resource URIs.
    pub fn uri_prefix(&self) -> &str {
        &self.uri_prefix
    }
}

impl Vault for SnapshotVault {
    fn resolve(&self, path: &str) -> Option<&Node> {
        if path == ROOT_PATH || path.is_empty() {
            return Some(&self.root);
        }
        self.root().find(path)
    }

    fn resource_uri(&self, path: &str) -> String {
        format!("{}{}", self.uri_prefix, encode_uri_path(path))
    }
}
