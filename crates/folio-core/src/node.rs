//! File and folder node types.

use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::path;

/// File metadata reported by the vault.
///
/// Every field is optional; a vault that cannot supply one leaves it unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Creation time (platform-dependent).
    pub created: Option<SystemTime>,
    /// Last modification time.
    pub modified: Option<SystemTime>,
    /// Size in bytes.
    pub size: Option<u64>,
}

impl FileStat {
    /// Create a stat with all fields present.
    pub fn new(created: SystemTime, modified: SystemTime, size: u64) -> Self {
        Self {
            created: Some(created),
            modified: Some(modified),
            size: Some(size),
        }
    }

    /// Create a stat with only the creation time.
    pub fn with_created(created: SystemTime) -> Self {
        Self {
            created: Some(created),
            ..Self::default()
        }
    }
}

/// A single file in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Full vault path, unique within the vault.
    pub path: CompactString,

    /// File name (last path component).
    pub name: CompactString,

    /// Extension without the leading dot, as reported by the vault.
    pub extension: CompactString,

    /// Path of the containing folder.
    pub parent_path: CompactString,

    /// File metadata.
    pub stat: FileStat,
}

impl FileNode {
    /// Create a file node, deriving name, extension and parent from `path`.
    pub fn new(path: impl Into<CompactString>) -> Self {
        let path = path.into();
        let name = CompactString::new(path::file_name(&path));
        let extension = CompactString::new(path::extension(&name));
        let parent_path = CompactString::new(path::parent_path(&path));
        Self {
            path,
            name,
            extension,
            parent_path,
            stat: FileStat::default(),
        }
    }

    /// Attach metadata.
    pub fn with_stat(mut self, stat: FileStat) -> Self {
        self.stat = stat;
        self
    }
}

/// A folder and its direct children, in vault order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Full vault path (`/` for the root).
    pub path: CompactString,

    /// Folder name (empty for the root).
    pub name: CompactString,

    /// Direct children. Order is whatever the vault reports.
    pub children: Vec<Node>,
}

impl FolderNode {
    /// Create an empty folder node.
    pub fn new(path: impl Into<CompactString>) -> Self {
        let path = path.into();
        let name = CompactString::new(path::file_name(&path));
        Self {
            path,
            name,
            children: Vec::new(),
        }
    }

    /// Create the vault root folder.
    pub fn root() -> Self {
        Self::new(path::ROOT_PATH)
    }

    /// Builder-style child insertion.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of files anywhere below this folder.
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::File(_) => 1,
                Node::Folder(folder) => folder.file_count(),
            })
            .sum()
    }

    /// Look up a descendant by its full vault path.
    pub fn find(&self, target: &str) -> Option<&Node> {
        for child in &self.children {
            if child.path() == target {
                return Some(child);
            }
            if let Node::Folder(folder) = child {
                let prefix = folder.path.as_str();
                if target.len() > prefix.len()
                    && target.starts_with(prefix)
                    && target.as_bytes()[prefix.len()] == b'/'
                {
                    return folder.find(target);
                }
            }
        }
        None
    }
}

/// Either a file or a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Full vault path of the node.
    pub fn path(&self) -> &str {
        match self {
            Node::File(file) => &file.path,
            Node::Folder(folder) => &folder.path,
        }
    }

    /// Name of the node.
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<FolderNode> for Node {
    fn from(folder: FolderNode) -> Self {
        Node::Folder(folder)
    }
}
