//! Core types and traits for folio.
//!
//! This crate provides the data structures shared by the rest of the
//! workspace: vault nodes, gallery settings and their YAML parser, output
//! records, disk scan configuration, error types, and the [`Vault`]
//! collaborator trait.

mod config;
mod error;
mod node;
pub mod path;
mod record;
mod scan_config;
mod vault;

pub use config::{
    Direction, GallerySettings, GallerySettingsBuilder, GroupBy, Layout, Platform, SortKey,
};
pub use error::{ConfigError, GalleryError, ScanError};
pub use node::{FileNode, FileStat, FolderNode, Node};
pub use record::DisplayRecord;
pub use scan_config::{ScanConfig, ScanConfigBuilder};
pub use vault::{SnapshotVault, Vault};
