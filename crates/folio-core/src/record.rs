//! Output records handed to the gallery renderer.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One display-ready image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// File name.
    pub name: CompactString,
    /// Path of the containing folder.
    pub folder: CompactString,
    /// Opaque locator produced by the vault.
    pub uri: String,
}
